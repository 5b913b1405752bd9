//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;

/// RepoNuke CLI
#[derive(Parser, Debug)]
#[command(name = "reponuke")]
#[command(version)]
#[command(about = "RepoNuke - Bulk GitHub Repository Deletion Tool", long_about = None)]
#[command(after_help = "Examples:
  reponuke repo1 repo2 repo3                 # Delete specific repositories
  reponuke --file repos.txt                  # Delete from file list
  reponuke --config repos.json               # Use JSON configuration
  reponuke --username john-doe repo1 repo2   # Specify username
  reponuke --interactive                     # Interactive mode
  reponuke --dry-run repo1 repo2             # Preview mode")]
pub struct Cli {
    /// Repository names to delete
    pub repositories: Vec<String>,

    /// GitHub username owning the repositories (defaults to the gh login)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Read repository list from file (one name per line, '#' comments allowed)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use configuration file (JSON with optional "username" and "repositories")
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip confirmation prompts (dangerous!)
    #[arg(short, long, default_value_t = false)]
    pub auto_confirm: bool,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Show what would be deleted without deleting
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Interactive repository selection mode
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
}

impl Cli {
    /// Default env_logger filter for this invocation
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            defaults::VERBOSE_LOG_LEVEL
        } else {
            defaults::LOG_LEVEL
        }
    }
}
