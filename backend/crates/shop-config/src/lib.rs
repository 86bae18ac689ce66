mod auth_config;
mod bounds;
mod config;
mod crm_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use crm_config::CrmConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "SHOP_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".shop";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_DEV_USER_ID: &str = "dev-user";
const DEFAULT_DEV_TENANT_ID: i64 = 1;
