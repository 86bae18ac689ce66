use crate::ConfigError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::LevelFilter;
use serde::Deserialize;

/// Log verbosity as written in `config.toml` or `SHOP_LOG_LEVEL`.
///
/// Accepts any `log` level name regardless of case; defaults to `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(LevelFilter::Info)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match LevelFilter::from_str(s.trim()) {
            Ok(filter) => Ok(LogLevel(filter)),
            Err(_) => Err(ConfigError::UnknownLogLevel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}
