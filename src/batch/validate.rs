//! Existence checks before anything is deleted

use std::io::Write;

use log::debug;

use crate::audit::AuditLog;
use crate::batch::BatchReport;
use crate::error::{NukeError, Result};
use crate::gh::{RemoteGateway, RepoRef};

/// Keep the candidates the gateway can see, in their original order.
///
/// Each rejected candidate counts as a failure, is reported, and is
/// recorded in the audit log. An empty result is fatal.
pub fn validate_candidates<G: RemoteGateway, W: Write>(
    gateway: &G,
    owner: &str,
    candidates: &[String],
    report: &mut BatchReport,
    audit: &AuditLog,
    verbose: bool,
    out: &mut W,
) -> Result<Vec<String>> {
    let mut valid = Vec::with_capacity(candidates.len());

    for name in candidates {
        let repo = RepoRef::new(owner, name);
        match gateway.view_repository(&repo) {
            Ok(()) => {
                debug!("Repository {} is accessible", repo);
                if verbose {
                    writeln!(out, "  ✓ {}", repo)?;
                }
                valid.push(name.clone());
            }
            Err(kind) => {
                report.inaccessible += 1;
                writeln!(
                    out,
                    "\x1b[1;33m⚠️  Repository not found or inaccessible: {}\x1b[0m",
                    repo
                )?;
                audit.record(&format!(
                    "FAILED: Repository not found or inaccessible: {} ({})",
                    repo, kind
                ));
            }
        }
    }

    if valid.is_empty() {
        return Err(NukeError::NoValidRepositories);
    }
    Ok(valid)
}
