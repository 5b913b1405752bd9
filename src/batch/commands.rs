//! End-to-end batch deletion command

use std::io::{BufRead, Write};

use clap::CommandFactory;
use log::{debug, info, warn};

use crate::audit::AuditLog;
use crate::batch::{
    execute_deletions, load_config, load_repo_file, prompt_selection, validate_candidates,
    BatchReport, ExecutionOptions, InputSource,
};
use crate::cli::Cli;
use crate::error::{NukeError, Result};
use crate::gh::RemoteGateway;
use crate::ui::{confirm_deletion, create_spinner, finish_spinner};

/// How a run ended without a fatal error. All of these exit 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Deletions were attempted (or simulated)
    Completed(BatchReport),
    /// The operator declined the confirmation gate
    Cancelled,
    /// The input source yielded no repositories
    NothingToDo,
}

/// Run the whole pipeline: prerequisites, input, validation, confirmation,
/// execution.
pub fn run_batch<G: RemoteGateway, R: BufRead, W: Write>(
    cli: &Cli,
    gateway: &G,
    audit: &AuditLog,
    options: &ExecutionOptions,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome> {
    writeln!(
        out,
        "\x1b[0;34m🔧 RepoNuke - Bulk GitHub Repository Deletion Tool\x1b[0m"
    )?;
    writeln!(out, "\x1b[0;34m======================================\x1b[0m")?;
    audit.record("Starting GitHub Batch Delete session");

    check_prerequisites(gateway, cli.auto_confirm)?;
    writeln!(out, "\x1b[0;32m✅ Authentication verified\x1b[0m")?;

    let source = InputSource::from_cli(cli);
    let mut config_username = None;
    let listed = match &source {
        InputSource::Config(path) => {
            let config = load_config(path)?;
            config_username = config.username().map(String::from);
            writeln!(
                out,
                "\x1b[0;32m⚙️  Loaded configuration from {}\x1b[0m",
                path.display()
            )?;
            Some(config.into_repositories())
        }
        InputSource::File(path) => {
            let repos = load_repo_file(path)?;
            writeln!(
                out,
                "\x1b[0;32m📂 Loaded {} repositories from {}\x1b[0m",
                repos.len(),
                path.display()
            )?;
            Some(repos)
        }
        InputSource::Explicit(names) => Some(names.clone()),
        InputSource::Interactive => None,
    };

    if listed.as_ref().is_some_and(|repos| repos.is_empty()) {
        writeln!(
            out,
            "\x1b[1;33mNo repositories specified for deletion.\x1b[0m"
        )?;
        writeln!(out, "{}", Cli::command().render_help())?;
        return Ok(RunOutcome::NothingToDo);
    }

    let username = resolve_username(gateway, cli.username.as_deref(), config_username)?;
    writeln!(out, "\x1b[0;36m👤 Using GitHub username: {}\x1b[0m", username)?;

    let candidates = match listed {
        Some(repos) => repos,
        None => {
            let chosen = select_interactively(gateway, &username, cli.auto_confirm, input, out)?;
            if chosen.is_empty() {
                return Ok(RunOutcome::NothingToDo);
            }
            chosen
        }
    };

    writeln!(out, "\x1b[1;33m🚀 Starting batch deletion process...\x1b[0m")?;
    writeln!(
        out,
        "\x1b[0;34mTotal repositories to delete: {}\x1b[0m",
        candidates.len()
    )?;
    writeln!(out)?;

    let mut report = BatchReport::new();
    let validated = validate_candidates(
        gateway,
        &username,
        &candidates,
        &mut report,
        audit,
        options.verbose,
        out,
    )?;
    debug!(
        "{} of {} candidates passed validation",
        validated.len(),
        candidates.len()
    );

    if !cli.auto_confirm
        && !confirm_deletion(&username, &validated, options.dry_run, input, out)?
    {
        writeln!(out, "\x1b[0;34mOperation cancelled.\x1b[0m")?;
        info!("Operator declined confirmation");
        return Ok(RunOutcome::Cancelled);
    }

    execute_deletions(
        gateway,
        &username,
        &validated,
        options,
        &mut report,
        audit,
        out,
    )?;
    info!(
        "Batch finished: {} successful, {} failed",
        report.successful,
        report.failed()
    );
    Ok(RunOutcome::Completed(report))
}

/// Verify gh is present, logged in, and allowed to delete
fn check_prerequisites<G: RemoteGateway>(gateway: &G, quiet: bool) -> Result<()> {
    let spinner = create_spinner("🔍 Checking GitHub authentication...", quiet);
    let result = gateway
        .check_installed()
        .and_then(|_| gateway.check_authenticated())
        .and_then(|_| gateway.ensure_delete_scope());
    finish_spinner(spinner);
    result
}

/// Username precedence:
/// 1. configuration file
/// 2. --username
/// 3. authenticated gh login
fn resolve_username<G: RemoteGateway>(
    gateway: &G,
    cli_username: Option<&str>,
    config_username: Option<String>,
) -> Result<String> {
    if let Some(username) = config_username {
        if cli_username.is_some_and(|u| !u.is_empty() && u != username) {
            warn!("Configuration username '{}' overrides --username", username);
        }
        debug!("Using username from configuration file");
        return Ok(username);
    }
    if let Some(username) = cli_username.filter(|u| !u.is_empty()) {
        debug!("Using username from CLI argument");
        return Ok(username.to_string());
    }
    debug!("No username supplied, asking gh for the authenticated login");
    gateway
        .resolve_username()
        .ok_or(NukeError::UsernameUnresolved)
}

/// List the user's repositories and let the operator pick from a menu
fn select_interactively<G: RemoteGateway, R: BufRead, W: Write>(
    gateway: &G,
    username: &str,
    quiet: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<String>> {
    writeln!(out, "\x1b[1;33m🎯 Interactive Repository Selection\x1b[0m")?;

    let spinner = create_spinner("📋 Fetching your repositories...", quiet);
    let repos = gateway.list_repositories(username);
    finish_spinner(spinner);

    if repos.is_empty() {
        writeln!(
            out,
            "\x1b[1;33mNo repositories found for user: {}\x1b[0m",
            username
        )?;
        return Ok(Vec::new());
    }

    writeln!(out, "\x1b[0;34mAvailable repositories:\x1b[0m")?;
    let chosen = prompt_selection(&repos, input, out)?;
    if chosen.is_empty() {
        writeln!(out, "\x1b[1;33mNo repositories selected. Exiting.\x1b[0m")?;
    }
    Ok(chosen)
}
