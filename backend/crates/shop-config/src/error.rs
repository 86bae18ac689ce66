use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{section} config error: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown log level '{value}' {location}")]
    UnknownLogLevel {
        value: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::invalid("auth", message)
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("general", message)
    }

    #[track_caller]
    pub fn crm<S: Into<String>>(message: S) -> Self {
        Self::invalid("crm", message)
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid("logging", message)
    }

    #[track_caller]
    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::invalid("rate_limit", message)
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::invalid("server", message)
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
