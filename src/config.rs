//! Optional TOML configuration.
//!
//! ```toml
//! copy_result = false
//!
//! [display]
//! max_len = 18
//! exponential_digits = 8
//!
//! [rounding]
//! decimals = 12
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

use crate::calculator::{DEFAULT_DECIMALS, DisplayFormat};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Largest rounding precision accepted; beyond this `10^decimals` loses the
/// integer range that rounding relies on.
pub const MAX_DECIMALS: i32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    /// Decimal digits kept in results.
    pub decimals: i32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayFormat,
    pub rounding: RoundingConfig,
    /// Copy the final result to the clipboard.
    pub copy_result: bool,
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load the config from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields the defaults; an explicitly
    /// given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        Self::read(&path, required)
    }

    /// Read and validate the config at `path`.
    ///
    /// When `required` is false a missing file yields the defaults.
    fn read(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check value ranges that the TOML types alone do not constrain.
    pub fn validate(&self) -> Result<(), String> {
        let decimals = self.rounding.decimals;
        if !(0..=MAX_DECIMALS).contains(&decimals) {
            return Err(format!(
                "rounding.decimals must be between 0 and {}, got {}",
                MAX_DECIMALS, decimals
            ));
        }
        Ok(())
    }
}
