//! Viewer configuration for `cardnews`.
//!
//! A small TOML file names the article directory and display preferences:
//!
//! ```toml
//! content_path = "~/cardnews/articles"
//! show_callout_icons = false
//! ```
//!
//! `content_path` may use `~` and `$VARS`; both are expanded on load.

use serde::{Deserialize, Serialize};
use std::{
    env::VarError,
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "CARDNEWS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot expand content_path '{value}' in {config_path}: {source}")]
    Expand {
        config_path: PathBuf,
        value: String,
        source: shellexpand::LookupError<VarError>,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for `.md` articles.
    pub content_path: PathBuf,
    /// Show the emoji next to callout labels. Some terminals render them
    /// at the wrong width.
    #[serde(default = "default_show_callout_icons")]
    pub show_callout_icons: bool,
}

fn default_show_callout_icons() -> bool {
    true
}

impl Config {
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
            show_callout_icons: default_show_callout_icons(),
        }
    }

    /// Parses TOML read from `config_path` and expands `content_path`.
    pub fn from_toml(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.content_path = {
            let raw = config.content_path.to_string_lossy();
            shellexpand::full(&raw)
                .map(|expanded| PathBuf::from(expanded.as_ref()))
                .map_err(|source| ConfigError::Expand {
                    config_path: config_path.to_path_buf(),
                    value: raw.to_string(),
                    source,
                })?
        };

        Ok(config)
    }

    /// Loads config from `config_path`, or `Ok(None)` when there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&content, config_path).map(Some)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write_error = |source| ConfigError::Write {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(config_path, content).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    /// `$CARDNEWS_CONFIG` if set, else `~/.config/cardnews-markup/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        let config_dir = shellexpand::tilde("~/.config/cardnews-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// Where the viewer's article directory came from.
///
/// A command-line argument wins over the config file. Kept so error messages
/// can point at the file that needs fixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Argument(PathBuf),
    ConfigFile {
        content_path: PathBuf,
        config_path: PathBuf,
    },
}

impl ContentSource {
    /// Picks the argument if given, else the loaded config's `content_path`.
    pub fn resolve(
        argument: Option<PathBuf>,
        config: Option<&Config>,
        config_path: &Path,
    ) -> Option<Self> {
        match (argument, config) {
            (Some(path), _) => Some(ContentSource::Argument(path)),
            (None, Some(config)) => Some(ContentSource::ConfigFile {
                content_path: config.content_path.clone(),
                config_path: config_path.to_path_buf(),
            }),
            (None, None) => None,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ContentSource::Argument(path) => path,
            ContentSource::ConfigFile { content_path, .. } => content_path,
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Argument(path) => write!(f, "'{}'", path.display()),
            ContentSource::ConfigFile {
                content_path,
                config_path,
            } => write!(
                f,
                "'{}' from config file '{}'",
                content_path.display(),
                config_path.display()
            ),
        }
    }
}
