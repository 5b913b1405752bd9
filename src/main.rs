//! RepoNuke - Main entry point

use std::io;

use clap::Parser;
use log::{debug, info};

use reponuke::{run_batch, AuditLog, Cli, ExecutionOptions, GhClient, RunOutcome};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    info!("Starting reponuke v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: repositories={:?}, username={:?}, file={:?}, config={:?}, \
         auto_confirm={}, dry_run={}, interactive={}",
        cli.repositories,
        cli.username,
        cli.file,
        cli.config,
        cli.auto_confirm,
        cli.dry_run,
        cli.interactive
    );

    let gateway = GhClient::new();
    let audit = AuditLog::new();
    let options = ExecutionOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        ..ExecutionOptions::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_batch(
        &cli,
        &gateway,
        &audit,
        &options,
        &mut stdin.lock(),
        &mut stdout.lock(),
    );

    match result {
        Ok(RunOutcome::Completed(report)) => {
            info!(
                "Completed: {} successful, {} failed",
                report.successful,
                report.failed()
            );
        }
        Ok(outcome) => {
            debug!("Finished without deleting: {:?}", outcome);
        }
        Err(e) => {
            eprintln!("\x1b[0;31m❌ {}\x1b[0m", e);
            std::process::exit(e.exit_code());
        }
    }
}
