//! Configuration file handling for motto.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/motto/config.toml` on Linux). A missing file means
//! defaults; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use motto_core::{ColorTheme, PhraseList};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file inside the config directory.
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color of the typed text.
    pub color_theme: ColorTheme,
    /// Draw a block cursor after the typed text.
    pub show_cursor: bool,
    /// Replacement for the built-in phrases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            show_cursor: true,
            phrases: None,
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "motto")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Phrases to animate: the override if it has any entries, else the built-in list.
    pub fn phrase_list(&self) -> PhraseList {
        self.phrases
            .as_ref()
            .and_then(|phrases| PhraseList::new(phrases.iter().cloned()).ok())
            .unwrap_or_default()
    }
}
