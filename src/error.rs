use std::fmt;

use crate::config::gh;

/// Fatal errors that abort the whole batch
#[derive(Debug)]
pub enum NukeError {
    /// The gh binary could not be executed
    GhNotInstalled,
    /// gh reports no authenticated session
    NotAuthenticated,
    /// The delete_repo scope could not be obtained
    ScopeEscalation,
    /// The authenticated login could not be determined
    UsernameUnresolved,
    /// A repository list file is missing or unreadable
    InputFile(String),
    /// A JSON configuration file is missing or malformed
    Config(String),
    /// Every candidate failed validation
    NoValidRepositories,
    /// Terminal read/write failed
    Io(std::io::Error),
}

impl fmt::Display for NukeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NukeError::GhNotInstalled => write!(
                f,
                "GitHub CLI (gh) is not installed!\n\
                 Please install it first:\n\
                 \x20 Windows: winget install --id GitHub.cli\n\
                 \x20 macOS:   brew install gh\n\
                 \x20 Linux:   sudo apt install gh"
            ),
            NukeError::NotAuthenticated => write!(
                f,
                "Not authenticated with GitHub!\nPlease run: gh auth login"
            ),
            NukeError::ScopeEscalation => write!(
                f,
                "Failed to get delete permissions!\nPlease run: gh auth refresh -h {} -s {}",
                gh::HOST,
                gh::DELETE_SCOPE
            ),
            NukeError::UsernameUnresolved => write!(
                f,
                "Could not determine GitHub username\nPass it explicitly with --username <LOGIN>"
            ),
            NukeError::InputFile(msg) => write!(f, "{}", msg),
            NukeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            NukeError::NoValidRepositories => write!(f, "No valid repositories found to delete"),
            NukeError::Io(e) => write!(f, "Terminal I/O failed: {}", e),
        }
    }
}

impl std::error::Error for NukeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NukeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NukeError {
    fn from(err: std::io::Error) -> Self {
        NukeError::Io(err)
    }
}

impl NukeError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, NukeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_authenticated_has_remediation() {
        let err = NukeError::NotAuthenticated;
        assert!(err.to_string().contains("gh auth login"));
    }

    #[test]
    fn test_scope_escalation_names_scope() {
        let msg = NukeError::ScopeEscalation.to_string();
        assert!(msg.contains("delete_repo"));
        assert!(msg.contains("github.com"));
    }

    #[test]
    fn test_config_error_display() {
        let err = NukeError::Config("expected value at line 1".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_from_io_error_keeps_source() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: NukeError = io_err.into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_every_fatal_error_exits_one() {
        assert_eq!(NukeError::GhNotInstalled.exit_code(), 1);
        assert_eq!(NukeError::NoValidRepositories.exit_code(), 1);
        assert_eq!(NukeError::InputFile("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NukeError>();
    }
}
