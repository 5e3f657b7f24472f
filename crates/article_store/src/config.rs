use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "articles.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed_path: Option<PathBuf>,
    pub window_title: String,
    pub log_filter: String,
    pub initial_search: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: None,
            window_title: "Article Manager".into(),
            log_filter: "info".into(),
            initial_search: String::new(),
        }
    }
}

/// `./articles.toml` when present, else the per-user config directory.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir().map(|dir| dir.join("article_manager").join(CONFIG_FILE_NAME))
}

/// Defaults with environment overrides, no file.
pub fn env_settings() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

/// Reads the default config file if one exists. A missing file is not an
/// error; an unreadable or malformed one is.
pub fn load_settings() -> Result<Settings, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Ok(env_settings()),
    }
}

/// Reads `path`, which must exist and parse, then applies env overrides.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    apply_file(&mut settings, path)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, path: &Path) -> Result<(), ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_cfg =
        toml::from_str::<HashMap<String, String>>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    apply_table(settings, &file_cfg);
    Ok(())
}

fn apply_table(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("seed_path") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("window_title") {
        settings.window_title = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    if let Some(v) = file_cfg.get("initial_search") {
        settings.initial_search = v.clone();
    }
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__SEED_PATH").filter(|v| !v.trim().is_empty()) {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = var("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__INITIAL_SEARCH") {
        settings.initial_search = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
