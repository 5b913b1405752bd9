//! Sequential deletion of validated repositories

use std::io::Write;
use std::thread::sleep;
use std::time::Duration;

use log::{debug, info};

use crate::audit::AuditLog;
use crate::batch::BatchReport;
use crate::config::batch;
use crate::error::Result;
use crate::gh::{RemoteGateway, RepoRef};

/// Knobs for the deletion loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub dry_run: bool,
    pub verbose: bool,
    /// Pause after every item
    pub pacing: Duration,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            pacing: Duration::from_millis(batch::PACING_MS),
        }
    }
}

/// Delete each repository in order, one at a time, updating `report`.
pub fn execute_deletions<G: RemoteGateway, W: Write>(
    gateway: &G,
    owner: &str,
    validated: &[String],
    options: &ExecutionOptions,
    report: &mut BatchReport,
    audit: &AuditLog,
    out: &mut W,
) -> Result<()> {
    let total = validated.len();
    writeln!(out)?;
    writeln!(out, "\x1b[0;32m🔄 Processing deletions...\x1b[0m")?;

    for (i, name) in validated.iter().enumerate() {
        let repo = RepoRef::new(owner, name);
        write!(out, "[{}/{}] ", i + 1, total)?;

        if options.dry_run {
            writeln!(out, "\x1b[0;34m[DRY RUN] Would delete: {}\x1b[0m", repo)?;
            info!("Dry run: skipped deletion of {}", repo);
            report.successful += 1;
        } else {
            if options.verbose {
                write!(out, "Deleting repository: {} ... ", repo)?;
                out.flush()?;
            }
            match gateway.delete_repository(&repo) {
                Ok(()) => {
                    report.successful += 1;
                    writeln!(out, "\x1b[0;32m✅ Successfully deleted: {}\x1b[0m", repo)?;
                    audit.record(&format!("SUCCESS: Deleted repository {}", repo));
                }
                Err(kind) => {
                    report.failed_deletions += 1;
                    writeln!(out, "\x1b[0;31m❌ Failed to delete: {} ({})\x1b[0m", repo, kind)?;
                    audit.record(&format!(
                        "FAILED: Could not delete repository {} ({})",
                        repo, kind
                    ));
                }
            }
        }

        out.flush()?;
        if !options.pacing.is_zero() {
            debug!("Pacing {:?} before next call", options.pacing);
            sleep(options.pacing);
        }
    }

    print_summary(report, options.dry_run, audit, out)
}

/// Print tallies; the summary log line is skipped for dry runs
fn print_summary<W: Write>(
    report: &BatchReport,
    dry_run: bool,
    audit: &AuditLog,
    out: &mut W,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "\x1b[0;36m📊 Deletion Summary:\x1b[0m")?;
    writeln!(
        out,
        "\x1b[0;32m  ✅ Successfully processed: {} repositories\x1b[0m",
        report.successful
    )?;
    writeln!(
        out,
        "\x1b[0;31m  ❌ Failed to process: {} repositories\x1b[0m",
        report.failed()
    )?;
    writeln!(
        out,
        "\x1b[0;34m  📋 Total processed: {} repositories\x1b[0m",
        report.total()
    )?;

    if !dry_run {
        audit.record(&format!(
            "SUMMARY: Processed {} repositories, {} successful, {} failed",
            report.total(),
            report.successful,
            report.failed()
        ));
    }

    if report.has_failures() {
        writeln!(out)?;
        writeln!(
            out,
            "\x1b[1;33m⚠️  Some operations failed. Check the log file: {}\x1b[0m",
            audit.path().display()
        )?;
    }

    writeln!(out, "\x1b[0;32m🎉 Batch deletion process completed!\x1b[0m")?;
    Ok(())
}
