/// Configuration constants for the gh CLI
pub mod gh {
    /// Name of the GitHub CLI binary (resolved through PATH)
    pub const PROGRAM: &str = "gh";

    /// Host passed to `gh auth refresh`
    pub const HOST: &str = "github.com";

    /// OAuth scope required for repository deletion
    pub const DELETE_SCOPE: &str = "delete_repo";

    /// Maximum number of repositories fetched for interactive selection
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for the audit log
pub mod audit {
    /// Log file name (relative to HOME)
    pub const FILE_NAME: &str = ".github-batch-delete.log";

    /// Timestamp format for log entries
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Batch execution settings
pub mod batch {
    /// Delay between consecutive deletions, in milliseconds
    pub const PACING_MS: u64 = 500;

    /// Literal the operator must type to confirm deletion
    pub const CONFIRMATION_TOKEN: &str = "DELETE";

    /// Token that selects every repository in interactive mode
    pub const SELECT_ALL_TOKEN: &str = "all";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Log level used with --verbose
    pub const VERBOSE_LOG_LEVEL: &str = "info";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_file_is_hidden() {
        assert!(audit::FILE_NAME.starts_with('.'));
    }

    #[test]
    fn test_gh_host_has_no_scheme() {
        assert!(gh::HOST.contains('.'));
        assert!(!gh::HOST.starts_with("https://"));
    }

    #[test]
    fn test_confirmation_token_is_uppercase() {
        assert_eq!(batch::CONFIRMATION_TOKEN, "DELETE");
    }
}
