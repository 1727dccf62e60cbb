use anyhow::Result;
use folio_engine::{CommandTable, Preset};
use folio_runtime::Config;
use folio_types::Portfolio;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config_path: PathBuf,
    config: OnceCell<Config>,
    portfolio: OnceCell<Portfolio>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(|| data_dir.join("config.toml"));
        Self {
            data_dir,
            config_path,
            config: OnceCell::new(),
            portfolio: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("folio.log")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            Config::load_from(&self.config_path).map_err(anyhow::Error::from)
        })
    }

    pub fn portfolio(&self) -> Result<&Portfolio> {
        let config = self.config()?;
        Ok(self.portfolio.get_or_init(|| config.portfolio()))
    }

    /// Command table for `preset`, or the configured preset when `None`.
    pub fn command_table(&self, preset: Option<Preset>) -> Result<CommandTable> {
        let config = self.config()?;
        let portfolio = self.portfolio()?;
        let preset = preset.unwrap_or(config.terminal.preset);
        Ok(config.command_table_for(preset, portfolio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::CommandAction;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_context() -> (TempDir, ExecutionContext) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        let config_path = data_dir.join("config.toml");
        let config_content = r#"
[terminal]
preset = "summary"

[terminal.commands]
resume = { kind = "navigate", path = "/resume" }

[gallery]
hidden = ["AxinTweak"]
"#;
        fs::write(&config_path, config_content).unwrap();

        let context = ExecutionContext::new(data_dir, None);
        (temp_dir, context)
    }

    #[test]
    fn test_configured_preset_is_default() {
        let (_temp_dir, context) = setup_test_context();
        let table = context.command_table(None).unwrap();
        assert!(matches!(
            table.get("projects"),
            Some(CommandAction::Print { .. })
        ));
        assert!(table.get("resume").is_some());
    }

    #[test]
    fn test_preset_override_keeps_custom_commands() {
        let (_temp_dir, context) = setup_test_context();
        let table = context.command_table(Some(Preset::Navigate)).unwrap();
        assert!(matches!(
            table.get("projects"),
            Some(CommandAction::Navigate { .. })
        ));
        assert!(table.get("resume").is_some());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let context = ExecutionContext::new(temp_dir.path().join("absent"), None);
        assert_eq!(context.config().unwrap().gallery.hidden.len(), 2);
        assert_eq!(context.portfolio().unwrap().projects.len(), 6);
    }

    #[test]
    fn test_explicit_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("custom.toml");
        fs::write(&custom, "[github]\nfetch_commits = false\n").unwrap();

        let context = ExecutionContext::new(temp_dir.path().join("data"), Some(custom.clone()));
        assert_eq!(context.config_path(), custom.as_path());
        assert!(!context.config().unwrap().github.fetch_commits);
    }
}
