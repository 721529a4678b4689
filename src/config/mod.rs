use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_goal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".timetracker";
const CONFIG_FILE: &str = "timetracker.conf";
const DB_FILE: &str = "timetracker.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Target worked time per business day (`8h`, `7h30m`, `450m`).
    #[serde(default = "default_daily_goal")]
    pub daily_goal: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Directory used by `export` when no `--file` is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_daily_goal() -> String {
    "8h".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_export_dir() -> String {
    Config::config_dir()
        .join("exports")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            daily_goal: default_daily_goal(),
            separator_char: default_separator_char(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// `~/.timetracker` (falls back to the current directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.export_dir = expand_tilde(&cfg.export_dir).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Daily goal in seconds.
    pub fn daily_goal_seconds(&self) -> AppResult<i64> {
        parse_goal(&self.daily_goal)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration directory, config file and database file.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join(DB_FILE),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // In test mode the user's config file is left untouched.
        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
