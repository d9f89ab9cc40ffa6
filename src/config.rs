//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <file>` or `$XDG_CONFIG_HOME/flightroster/flightroster.toml`
//! 3. Environment variables: `FLIGHTROSTER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "FLIGHTROSTER";

/// Unified configuration for flightroster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prompt shown by the interactive shell
    pub prompt: String,
    /// Load the demo data set when the shell starts
    pub load_demo: bool,
    /// Capacity used by `flight add` when none is given
    pub default_capacity: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "flightroster> ".into(),
            load_demo: false,
            default_capacity: 15,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub prompt: Option<String>,
    pub load_demo: Option<bool>,
    pub default_capacity: Option<u32>,
}

/// Get the XDG config directory for flightroster.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flightroster").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("flightroster.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            load_demo: overlay.load_demo.unwrap_or(self.load_demo),
            default_capacity: overlay.default_capacity.unwrap_or(self.default_capacity),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist. Without it the
    ///   global config is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        let file = match config_file {
            Some(path) if !path.exists() => {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            Some(path) => Some(path.to_path_buf()),
            None => global_config_path().filter(|path| path.exists()),
        };

        if let Some(path) = file {
            debug!("loading config from {}", path.display());
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw);
        }

        current.with_env_overrides(None)
    }

    /// Apply `FLIGHTROSTER_*` variables as explicit overrides.
    ///
    /// `vars` replaces the process environment when given (used by tests).
    pub fn with_env_overrides(
        mut self,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("prompt") {
            self.prompt = val;
        }
        match config.get_bool("load_demo") {
            Ok(val) => self.load_demo = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get::<u32>("default_capacity") {
            Ok(val) => self.default_capacity = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# flightroster configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/flightroster/flightroster.toml  (or --config <file>)
#   Env:  FLIGHTROSTER_* environment variables    (explicit overrides)

# Prompt of the interactive shell
# prompt = "flightroster> "

# Load the demo flights when the shell starts
# load_demo = false

# Seat capacity used by `flight add` when none is given
# default_capacity = 15
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let overlay = RawSettings {
            load_demo: Some(true),
            ..RawSettings::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert!(merged.load_demo);
        assert_eq!(merged.prompt, "flightroster> ");
        assert_eq!(merged.default_capacity, 15);
    }
}
