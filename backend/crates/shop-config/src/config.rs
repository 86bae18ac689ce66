use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CrmConfig,
    DEFAULT_CONFIG_DIR, LoggingConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub crm: CrmConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. SHOP_CONFIG_DIR env var, else ./.shop/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SHOP_* environment variable overrides
    /// 5. Warn about a stray ~/.shop/config.toml that is not being used
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Self::warn_on_home_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn warn_on_home_config(config_dir: &Path) {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let home_config_dir = home.join(DEFAULT_CONFIG_DIR);
        if home_config_dir != config_dir && home_config_dir.join(CONFIG_FILENAME).exists() {
            warn!(
                "Ignoring {}; configuration is read from {} (set {} to change)",
                home_config_dir.join(CONFIG_FILENAME).display(),
                config_dir.display(),
                CONFIG_DIR_ENV
            );
        }
    }

    /// Get the config directory.
    /// Priority: SHOP_CONFIG_DIR env var > ./.shop/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.rate_limit.validate()?;
        self.crm.validate()?;

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        // Joined under logging.dir, so a bare file name keeps it there
        if let Some(ref file) = self.logging.file {
            let file_name = Path::new(file).file_name();
            let bare_name = file_name.is_some_and(|name| name == file.as_str());
            if !bare_name || file.contains(['/', '\\']) {
                return Err(ConfigError::logging(
                    "logging.file must be a plain file name without directories or '..'",
                ));
            }
        }

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (metrics: {}, max body {} bytes)",
            self.server.host,
            self.server.port,
            self.server.metrics_enabled,
            self.server.max_body_bytes
        );

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.auth_type()
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  rate_limit: {} messages/{}s per tenant",
            self.rate_limit.max_messages, self.rate_limit.window_secs
        );

        info!(
            "  crm: content={}, identifier={}, metadata entries={}",
            self.crm.max_content_length,
            self.crm.max_identifier_length,
            self.crm.max_metadata_entries
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SHOP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SHOP_SERVER_PORT", &mut self.server.port);
        Self::apply_env_bool("SHOP_METRICS_ENABLED", &mut self.server.metrics_enabled);
        Self::apply_env_parse("SHOP_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Auth
        Self::apply_env_bool("SHOP_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("SHOP_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "SHOP_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_string("SHOP_AUTH_DEV_USER_ID", &mut self.auth.dev_user_id);
        Self::apply_env_parse("SHOP_AUTH_DEV_TENANT_ID", &mut self.auth.dev_tenant_id);

        // Logging
        Self::apply_env_parse("SHOP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SHOP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SHOP_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "SHOP_RATE_LIMIT_MAX_MESSAGES",
            &mut self.rate_limit.max_messages,
        );
        Self::apply_env_parse(
            "SHOP_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // CRM
        Self::apply_env_parse(
            "SHOP_CRM_MAX_CONTENT_LENGTH",
            &mut self.crm.max_content_length,
        );
        Self::apply_env_parse(
            "SHOP_CRM_MAX_IDENTIFIER_LENGTH",
            &mut self.crm.max_identifier_length,
        );
        Self::apply_env_parse(
            "SHOP_CRM_MAX_METADATA_ENTRIES",
            &mut self.crm.max_metadata_entries,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
