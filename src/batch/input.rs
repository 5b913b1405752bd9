//! Candidate list sources: explicit names, list files, JSON configuration

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{NukeError, Result};

/// Where the candidate list comes from. Exactly one source is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// JSON configuration file
    Config(PathBuf),
    /// Plain-text list file
    File(PathBuf),
    /// Numbered menu of the user's repositories
    Interactive,
    /// Names given on the command line
    Explicit(Vec<String>),
}

impl InputSource {
    /// Pick the winning source:
    /// 1. --config
    /// 2. --file
    /// 3. --interactive
    /// 4. positional names
    /// 5. interactive fallback
    pub fn from_cli(cli: &Cli) -> Self {
        let source = if let Some(path) = &cli.config {
            InputSource::Config(path.clone())
        } else if let Some(path) = &cli.file {
            InputSource::File(path.clone())
        } else if cli.interactive || cli.repositories.is_empty() {
            InputSource::Interactive
        } else {
            InputSource::Explicit(cli.repositories.clone())
        };

        source.warn_ignored(cli);
        debug!("Using input source: {:?}", source);
        source
    }

    fn warn_ignored(&self, cli: &Cli) {
        let rank = self.rank();
        if cli.file.is_some() && rank < 2 {
            warn!("Ignoring --file: --config takes precedence");
        }
        if cli.interactive && rank < 3 {
            warn!("Ignoring --interactive: a list source was given");
        }
        if !cli.repositories.is_empty() && rank < 4 {
            warn!(
                "Ignoring {} positional repository name(s)",
                cli.repositories.len()
            );
        }
    }

    fn rank(&self) -> u8 {
        match self {
            InputSource::Config(_) => 1,
            InputSource::File(_) => 2,
            InputSource::Interactive => 3,
            InputSource::Explicit(_) => 4,
        }
    }
}

/// Repository list JSON configuration
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Owner of the repositories; falls back to the gh login
    #[serde(default)]
    pub username: Option<String>,
    /// Repository names; absent means none
    #[serde(default)]
    pub repositories: Option<Vec<String>>,
}

impl BatchConfig {
    /// Username override, treating an empty string as absent
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Candidate names; absent and empty both mean "no repositories"
    pub fn into_repositories(self) -> Vec<String> {
        self.repositories.unwrap_or_default()
    }
}

/// Parse repository list text: one name per line, blank and `#` lines ignored
pub fn parse_repo_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Load candidates from a plain-text list file
pub fn load_repo_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(NukeError::InputFile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        NukeError::InputFile(format!("Error reading file {}: {}", path.display(), e))
    })?;

    let repos = parse_repo_list(&content);
    debug!("Parsed {} repositories from {}", repos.len(), path.display());
    Ok(repos)
}

/// Load a JSON configuration file
pub fn load_config(path: &Path) -> Result<BatchConfig> {
    if !path.exists() {
        return Err(NukeError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        NukeError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        NukeError::Config(format!(
            "Failed to parse configuration file {}: {}",
            path.display(),
            e
        ))
    })
}
