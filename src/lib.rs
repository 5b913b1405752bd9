//! RepoNuke - Bulk GitHub repository deletion
//!
//! Deletes many repositories in one go through the authenticated `gh` CLI.
//!
//! # Features
//!
//! - Repository names from arguments, a list file, a JSON config, or an
//!   interactive numbered menu
//! - Existence check for every repository before anything is deleted
//! - Typed `DELETE` confirmation (skippable with `--auto-confirm`)
//! - Dry-run mode
//! - Append-only audit log in `~/.github-batch-delete.log`
//!
//! # Example
//!
//! ```bash
//! # Delete specific repositories
//! reponuke repo1 repo2 repo3
//!
//! # Delete from a list file, preview only
//! reponuke --file repos.txt --dry-run
//!
//! # Pick from a menu
//! reponuke --interactive
//! ```

pub mod audit;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod gh;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use audit::AuditLog;
pub use batch::{run_batch, BatchConfig, BatchReport, ExecutionOptions, InputSource, RunOutcome};
pub use cli::Cli;
pub use error::{NukeError, Result};
pub use gh::{GatewayFailure, GhClient, RemoteGateway, RepoRef};
