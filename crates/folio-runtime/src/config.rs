use crate::{Error, Result};
use folio_engine::{CommandAction, CommandTable, Preset};
use folio_types::Portfolio;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.folio (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FOLIO_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("folio"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".folio"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TerminalConfig {
    #[serde(default)]
    pub preset: Preset,
    /// Per-command overrides layered on top of the preset.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, CommandAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Project titles left off the home page gallery.
    #[serde(default)]
    pub hidden: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            hidden: vec!["Exam AI".to_string(), "MovieRec AI".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_true")]
    pub fetch_commits: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            fetch_commits: true,
            timeout_secs: default_timeout_secs(),
            api_base: default_api_base(),
        }
    }
}

impl GithubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub github: GithubConfig,
    /// Replaces the built-in portfolio content when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Portfolio>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content {
            content.validate()?;
        }
        for name in self.terminal.commands.keys() {
            if name.is_empty() {
                return Err(Error::Config("terminal command name is empty".to_string()));
            }
        }
        Ok(())
    }

    pub fn portfolio(&self) -> Portfolio {
        self.content.clone().unwrap_or_default()
    }

    /// The preset table with the configured overrides applied.
    pub fn command_table(&self, portfolio: &Portfolio) -> CommandTable {
        self.command_table_for(self.terminal.preset, portfolio)
    }

    pub fn command_table_for(&self, preset: Preset, portfolio: &Portfolio) -> CommandTable {
        let mut table = CommandTable::preset(preset, portfolio);
        for (name, action) in &self.terminal.commands {
            table.insert(name, action.clone());
        }
        table
    }
}
