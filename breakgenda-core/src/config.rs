//! Global breakgenda configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEZONE;
use crate::day::parse_timezone;
use crate::error::{BreakgendaError, BreakgendaResult};

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// Configuration at ~/.config/breakgenda/config.toml
///
/// The venue and day registries are part of the program and can't be
/// configured here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BreakgendaConfig {
    /// Directory with speakers.json and sessions.json. Unset means the
    /// bundled dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for BreakgendaConfig {
    fn default() -> Self {
        BreakgendaConfig {
            data_dir: None,
            timezone: default_timezone(),
        }
    }
}

impl BreakgendaConfig {
    pub fn config_path() -> BreakgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BreakgendaError::Config("Could not determine config directory".into()))?
            .join("breakgenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default first if none exists.
    pub fn load() -> BreakgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file, with `BREAKGENDA_*` environment overrides.
    pub fn load_from(path: &Path) -> BreakgendaResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("BREAKGENDA"))
            .build()
            .map_err(|e| BreakgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BreakgendaError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            PathBuf::from(expanded)
        })
    }

    pub fn tz(&self) -> BreakgendaResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn to_toml(&self) -> BreakgendaResult<String> {
        toml::to_string_pretty(self).map_err(|e| BreakgendaError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BreakgendaResult<()> {
        let contents = format!(
            "\
# breakgenda configuration

# Directory holding speakers.json and sessions.json (defaults to the bundled schedule):
# data_dir = \"~/breakgenda\"

# Time zone used to display session days and times:
# timezone = \"{}\"
",
            DEFAULT_TIMEZONE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BreakgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BreakgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_default_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breakgenda/config.toml");

        BreakgendaConfig::create_default_config(&path).unwrap();
        let config = BreakgendaConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, None);
        assert_eq!(config.timezone, "Europe/Lisbon");
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::Lisbon);
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/schedule\"\ntimezone = \"UTC\"\n").unwrap();

        let config = BreakgendaConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), Some(PathBuf::from("/srv/schedule")));
        assert_eq!(config.tz().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn bad_timezone_surfaces_on_use() {
        let config = BreakgendaConfig {
            data_dir: None,
            timezone: "Nowhere/Special".into(),
        };
        assert!(matches!(config.tz(), Err(BreakgendaError::Timezone(_))));
    }

    #[test]
    fn expands_tilde_in_data_dir() {
        let config = BreakgendaConfig {
            data_dir: Some(PathBuf::from("~/schedule")),
            ..Default::default()
        };

        let expanded = config.data_path().unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("schedule"));
    }

    #[test]
    fn default_serializes_without_data_dir() {
        let toml = BreakgendaConfig::default().to_toml().unwrap();
        assert_eq!(toml.trim(), "timezone = \"Europe/Lisbon\"");
    }
}
