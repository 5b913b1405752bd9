//! Append-only audit log of deletion outcomes

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::warn;

use crate::config::audit as audit_config;

/// Writes timestamped lines to the audit log file
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog {
    /// Create a log at the default path (~/.github-batch-delete.log)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a log at a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the default log file path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(audit_config::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `<timestamp> - <message>`.
    /// Failures are reported as warnings and never abort the batch.
    pub fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            warn!(
                "Failed to write audit log {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_entry(&Local::now(), message))
    }
}

/// Format a single log line
fn format_entry<Tz: chrono::TimeZone>(at: &chrono::DateTime<Tz>, message: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} - {}",
        at.format(audit_config::TIMESTAMP_FORMAT),
        message
    )
}
