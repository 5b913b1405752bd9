//! Repository references and gateway failure kinds

use std::fmt;

/// A repository addressed as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Coarse classification of a failed gh call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayFailure {
    /// Repository does not exist or is not visible
    NotFound,
    /// Credentials or permissions rejected
    Auth,
    /// Network trouble or rate limiting
    Transient,
    /// Anything else, including gh failing to start
    Unknown,
}

impl GatewayFailure {
    /// Classify a failure from gh's stderr
    pub fn from_stderr(stderr: &str) -> Self {
        let lower = stderr.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

        if has(&["could not resolve to a repository", "not found", "http 404"]) {
            GatewayFailure::NotFound
        } else if has(&[
            "http 401",
            "http 403",
            "must have admin rights",
            "delete_repo",
            "authentication",
            "gh auth login",
            "scope",
        ]) {
            GatewayFailure::Auth
        } else if has(&[
            "rate limit",
            "timeout",
            "timed out",
            "connection",
            "http 502",
            "http 503",
            "http 504",
        ]) {
            GatewayFailure::Transient
        } else {
            GatewayFailure::Unknown
        }
    }
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayFailure::NotFound => write!(f, "not-found"),
            GatewayFailure::Auth => write!(f, "auth-error"),
            GatewayFailure::Transient => write!(f, "transient"),
            GatewayFailure::Unknown => write!(f, "unknown"),
        }
    }
}
