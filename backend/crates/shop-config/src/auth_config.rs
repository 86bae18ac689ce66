use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_TENANT_ID,
    DEFAULT_DEV_USER_ID, MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When false, every request runs as the development identity
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub dev_user_id: String,
    pub dev_tenant_id: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: String::from(DEFAULT_DEV_USER_ID),
            dev_tenant_id: DEFAULT_DEV_TENANT_ID,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.dev_tenant_id <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.dev_tenant_id must be positive, got {}",
                self.dev_tenant_id
            )));
        }

        if self.dev_user_id.is_empty() {
            return Err(ConfigError::auth("auth.dev_user_id cannot be empty"));
        }

        if !self.enabled {
            return Ok(());
        }

        if let Some(ref secret) = self.jwt_secret {
            if secret.len() < MIN_JWT_SECRET_LENGTH {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            return Ok(());
        }

        let Some(ref key_path) = self.jwt_public_key_path else {
            return Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            ));
        };

        if Path::new(key_path).is_absolute() {
            return Err(ConfigError::auth(
                "auth.jwt_public_key_path must be relative to the config directory",
            ));
        }

        if key_path.contains("..") {
            return Err(ConfigError::auth(
                "auth.jwt_public_key_path cannot contain '..'",
            ));
        }

        let full_path = config_dir.join(key_path);
        if !full_path.exists() {
            return Err(ConfigError::auth(format!(
                "auth.jwt_public_key_path does not exist: {}",
                full_path.display()
            )));
        }

        Ok(())
    }

    /// Absolute path of the RS256 public key, if one is configured
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.jwt_public_key_path
            .as_ref()
            .map(|path| config_dir.join(path))
    }

    pub fn auth_type(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
