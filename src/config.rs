use crate::error::{DocklintError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".docklint.toml";
pub const DEFAULT_LINTER_BIN: &str = "dockerfilelint";
pub const DEFAULT_CHECK_NAME: &str = "Docker Lint Check";
pub const TARGET_ENV: &str = "INPUT_TARGET";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub linter: Option<LinterConfig>,
    pub check: Option<CheckConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinterConfig {
    pub bin: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    pub name: Option<String>,
}

pub fn load_file_config(root: &Path) -> Result<Option<FileConfig>> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| DocklintError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(cfg))
}

/// Effective settings for one run, after CLI flags and `.docklint.toml`
/// have been merged. CLI wins over file, file wins over defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub linter_bin: String,
    pub check_name: String,
}

impl RunSettings {
    pub fn resolve(cli_linter_bin: Option<&str>, file: Option<&FileConfig>) -> Self {
        let file_bin = file
            .and_then(|cfg| cfg.linter.as_ref())
            .and_then(|linter| linter.bin.as_deref());
        let file_name = file
            .and_then(|cfg| cfg.check.as_ref())
            .and_then(|check| check.name.as_deref());

        RunSettings {
            linter_bin: cli_linter_bin
                .or(file_bin)
                .unwrap_or(DEFAULT_LINTER_BIN)
                .to_string(),
            check_name: file_name.unwrap_or(DEFAULT_CHECK_NAME).to_string(),
        }
    }
}

/// Resolve the lint target from the CLI argument, falling back to the
/// INPUT_TARGET variable the hosting workflow supplies.
pub fn resolve_target(cli_target: Option<String>) -> Result<String> {
    if let Some(target) = cli_target {
        return Ok(target);
    }
    std::env::var(TARGET_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(DocklintError::MissingTarget)
}

/// Commit and repository context for the check-run API, supplied by the
/// hosting environment.
#[derive(Debug, Clone)]
pub struct GithubContext {
    pub token: String,
    pub repository: String,
    pub sha: String,
    pub api_url: String,
}

impl GithubContext {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| DocklintError::MissingEnv(name.to_string()))
        };

        Ok(GithubContext {
            token: require("GITHUB_TOKEN")?,
            repository: require("GITHUB_REPOSITORY")?,
            sha: require("GITHUB_SHA")?,
            api_url: lookup("GITHUB_API_URL")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "https://api.github.com".to_string()),
        })
    }
}
