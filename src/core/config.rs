use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus `--db` override).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", yaml);
        Ok(())
    }

    /// Platform default: $EDITOR, $VISUAL, then nano / notepad.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to the default one.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save_to(path)?;
        }

        let default_editor = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::run_editor(&requested, path) {
            success(format!("Configuration edited with '{}'", requested));
            return Ok(());
        }

        if requested != default_editor {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                requested, default_editor
            ));
            if Self::run_editor(&default_editor, path) {
                success(format!("Configuration edited with '{}'", default_editor));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            requested
        )))
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
