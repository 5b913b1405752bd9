//! The gateway seam between the batch pipeline and the remote service

use crate::error::Result;
use crate::gh::{GatewayFailure, RepoRef};

/// Every remote operation the batch pipeline needs
///
/// All calls are synchronous one-shot invocations. Prerequisite checks return
/// fatal errors; per-repository calls report a coarse [`GatewayFailure`] whose
/// kind only ever reaches the audit log.
pub trait RemoteGateway {
    /// Verify the client program is available
    fn check_installed(&self) -> Result<()>;

    /// Verify there is a logged-in session
    fn check_authenticated(&self) -> Result<()>;

    /// Make sure the session may delete repositories, escalating if needed
    fn ensure_delete_scope(&self) -> Result<()>;

    /// Login of the authenticated user, if it can be determined
    fn resolve_username(&self) -> Option<String>;

    /// Repository names owned by `username`; empty on any failure
    fn list_repositories(&self, username: &str) -> Vec<String>;

    /// Look up a single repository
    fn view_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure>;

    /// Delete a single repository without interactive confirmation
    fn delete_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGateway;

    #[test]
    fn test_view_repository_reports_missing_as_not_found() {
        let gateway = FakeGateway::new("octocat", &["present"]).with_missing(&["gone"]);
        assert_eq!(
            gateway.view_repository(&RepoRef::new("octocat", "present")),
            Ok(())
        );
        assert_eq!(
            gateway.view_repository(&RepoRef::new("octocat", "gone")),
            Err(GatewayFailure::NotFound)
        );
    }

    #[test]
    fn test_view_repository_is_idempotent() {
        let gateway = FakeGateway::new("octocat", &["present"]).with_missing(&["gone"]);
        let present = RepoRef::new("octocat", "present");
        let gone = RepoRef::new("octocat", "gone");
        assert_eq!(
            gateway.view_repository(&present),
            gateway.view_repository(&present)
        );
        assert_eq!(gateway.view_repository(&gone), gateway.view_repository(&gone));
        assert_eq!(gateway.view_calls.get(), 4);
    }
}
