use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::parse::DEFAULT_MAX_ARGS;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ELIASH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub max_args: usize,
    /// Consecutive failed forks after which the shell gives up.
    pub max_spawn_failures: u32,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "$ ".into(),
            max_args: DEFAULT_MAX_ARGS,
            max_spawn_failures: 3,
            log_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    /// Loads the file named by `ELIASH_CONFIG`, or the defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        src.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
