//! Gateway implementation that shells out to the GitHub CLI

use std::ffi::OsString;
use std::process::{Command, Output, Stdio};

use log::{debug, warn};

use crate::config::gh;
use crate::error::{NukeError, Result};
use crate::gh::{GatewayFailure, RemoteGateway, RepoRef};

/// Runs `gh` subcommands and maps their exit status onto gateway results
#[derive(Debug, Clone)]
pub struct GhClient {
    program: OsString,
    page_size: u32,
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GhClient {
    /// Client for the `gh` binary found on PATH
    pub fn new() -> Self {
        Self {
            program: OsString::from(gh::PROGRAM),
            page_size: gh::DEFAULT_PAGE_SIZE,
        }
    }

    /// Client for an explicit binary (for testing)
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            ..Self::new()
        }
    }

    /// Run gh with the given arguments, capturing output
    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!("Running {} {}", self.program.to_string_lossy(), args.join(" "));
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
    }

    /// Run gh attached to the terminal so it can prompt the operator
    fn run_attached(&self, args: &[&str]) -> bool {
        debug!("Running {} {}", self.program.to_string_lossy(), args.join(" "));
        match Command::new(&self.program).args(args).status() {
            Ok(status) => status.success(),
            Err(e) => {
                warn!("Failed to execute {}: {}", self.program.to_string_lossy(), e);
                false
            }
        }
    }

    /// Run gh and return trimmed stdout on success
    fn run_checked(&self, args: &[&str]) -> std::result::Result<String, GatewayFailure> {
        let output = self.run(args).map_err(|e| {
            warn!("Failed to execute {}: {}", self.program.to_string_lossy(), e);
            GatewayFailure::Unknown
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("gh {} failed: {}", args.join(" "), stderr.trim());
            return Err(GatewayFailure::from_stderr(&stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl RemoteGateway for GhClient {
    fn check_installed(&self) -> Result<()> {
        match self.run(&["--version"]) {
            Ok(output) if output.status.success() => Ok(()),
            _ => Err(NukeError::GhNotInstalled),
        }
    }

    fn check_authenticated(&self) -> Result<()> {
        self.run_checked(&["auth", "status"])
            .map(|_| ())
            .map_err(|_| NukeError::NotAuthenticated)
    }

    fn ensure_delete_scope(&self) -> Result<()> {
        if self.run_checked(&["api", "user", "--silent"]).is_ok() {
            return Ok(());
        }

        warn!("Scope check failed, requesting {} scope", gh::DELETE_SCOPE);
        if self.run_attached(&["auth", "refresh", "-h", gh::HOST, "-s", gh::DELETE_SCOPE]) {
            Ok(())
        } else {
            Err(NukeError::ScopeEscalation)
        }
    }

    fn resolve_username(&self) -> Option<String> {
        match self.run_checked(&["api", "user", "--jq", ".login"]) {
            Ok(login) if !login.is_empty() => Some(login),
            Ok(_) => None,
            Err(kind) => {
                warn!("Could not query authenticated user ({})", kind);
                None
            }
        }
    }

    fn list_repositories(&self, username: &str) -> Vec<String> {
        let limit = self.page_size.to_string();
        let args = [
            "repo",
            "list",
            username,
            "--limit",
            limit.as_str(),
            "--json",
            "name",
            "--jq",
            ".[].name",
        ];
        match self.run_checked(&args) {
            Ok(stdout) => parse_name_lines(&stdout),
            Err(kind) => {
                warn!("Listing repositories for '{}' failed ({})", username, kind);
                Vec::new()
            }
        }
    }

    fn view_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure> {
        let qualified = repo.to_string();
        self.run_checked(&["repo", "view", qualified.as_str()]).map(|_| ())
    }

    fn delete_repository(&self, repo: &RepoRef) -> std::result::Result<(), GatewayFailure> {
        let qualified = repo.to_string();
        self.run_checked(&["repo", "delete", qualified.as_str(), "--yes"])
            .map(|_| ())
    }
}

/// Split `--jq .[].name` output into names, dropping blank lines
fn parse_name_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
