use std::path::PathBuf;

use thiserror::Error;

/// Startup failures; the server never starts serving after one of these
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] shop_config::ConfigError),

    #[error("JWT validator could not be built: {0}")]
    Auth(#[from] shop_auth::AuthError),

    #[error("Cannot read JWT public key {}: {source}", path.display())]
    JwtKeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path")]
    MissingJwtConfig,

    #[error("Cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global logger is already installed")]
    LoggerInstalled(#[from] log::SetLoggerError),

    #[error("Prometheus recorder could not be installed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
