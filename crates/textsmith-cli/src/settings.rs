use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use textsmith_engine::{ConflictPolicy, EngineOptions};

use crate::error::{CliError, CliResult};

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "textsmith.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Fixed seed for reproducible output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Upper bound on characters produced by one generation.
    pub max_generate: usize,
    /// What to do when generating into a non-empty buffer.
    pub on_conflict: ConflictPolicy,
    /// Default tracing filter; `TEXTSMITH_LOG` takes precedence.
    pub log_level: String,
    /// Append JSON logs to this file instead of writing to stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let engine = EngineOptions::default();
        Self {
            seed: engine.seed,
            max_generate: engine.max_generate,
            on_conflict: ConflictPolicy::default(),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            seed: self.seed,
            max_generate: self.max_generate,
        }
    }
}

/// Loads settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] when it exists.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_settings(path: Option<&Path>) -> CliResult<Settings> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::InvalidConfig(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> CliResult<Settings> {
    let settings: Settings = toml::from_str(content)?;
    if settings.max_generate == 0 {
        return Err(CliError::InvalidConfig(
            "max_generate must be greater than 0".to_string(),
        ));
    }
    Ok(settings)
}

pub fn render_settings(settings: &Settings) -> CliResult<String> {
    Ok(toml::to_string_pretty(settings)?)
}
