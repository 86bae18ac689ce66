use crate::CrmMetrics;
use crate::error::{Result as ServerErrorResult, ServerError};

use shop_auth::{AuthenticatedIdentity, JwtKey, JwtValidator, TenantClaim, TenantRateLimiter};
use shop_config::Config;
use shop_core::CrmLimits;
use shop_store::ConversationStore;

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConversationStore>,
    /// `None` runs in development mode: every request gets `dev_identity`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub dev_identity: AuthenticatedIdentity,
    pub rate_limiter: Arc<TenantRateLimiter>,
    pub limits: CrmLimits,
    pub max_body_bytes: usize,
    pub metrics: CrmMetrics,
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from validated configuration.
    ///
    /// `config_dir` anchors the relative RS256 key path.
    pub fn from_config(
        config: &Config,
        config_dir: &Path,
        store: Arc<dyn ConversationStore>,
        prometheus: Option<PrometheusHandle>,
    ) -> ServerErrorResult<Self> {
        let jwt_validator = if config.auth.enabled {
            let key = jwt_key(config, config_dir)?;
            let validator = JwtValidator::new(&key)?;
            info!("JWT: {} authentication enabled", validator.algorithm());
            Some(Arc::new(validator))
        } else {
            warn!(
                "Authentication DISABLED - all requests run as '{}' in tenant {}",
                config.auth.dev_user_id, config.auth.dev_tenant_id
            );
            None
        };

        let rate_limiter = TenantRateLimiter::new(shop_auth::SendQuota {
            max_messages: config.rate_limit.max_messages,
            window_secs: config.rate_limit.window_secs,
        });
        let quota = rate_limiter.quota();
        info!(
            "Rate limit: {} messages per {}s per tenant",
            quota.max_messages, quota.window_secs
        );

        Ok(Self {
            store,
            jwt_validator,
            dev_identity: dev_identity(&config.auth.dev_user_id, config.auth.dev_tenant_id),
            rate_limiter: Arc::new(rate_limiter),
            limits: CrmLimits {
                max_content_length: config.crm.max_content_length,
                max_identifier_length: config.crm.max_identifier_length,
                max_metadata_entries: config.crm.max_metadata_entries,
            },
            max_body_bytes: config.server.max_body_bytes,
            metrics: CrmMetrics::new(),
            prometheus,
        })
    }

    pub fn auth_enabled(&self) -> bool {
        self.jwt_validator.is_some()
    }
}

fn jwt_key(config: &Config, config_dir: &Path) -> ServerErrorResult<JwtKey> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtKey::SharedSecret(secret.as_bytes().to_vec()));
    }

    let Some(full_path) = config.auth.public_key_path(config_dir) else {
        return Err(ServerError::MissingJwtConfig);
    };

    let public_key_pem =
        std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
            path: full_path.clone(),
            source: e,
        })?;

    Ok(JwtKey::RsaPublicPem(public_key_pem))
}

/// Identity attached to every request while authentication is disabled
pub fn dev_identity(user_id: &str, tenant_id: i64) -> AuthenticatedIdentity {
    AuthenticatedIdentity {
        user_id: user_id.to_string(),
        tenant_id: Some(TenantClaim::Integer(tenant_id)),
        email: None,
        name: Some("Development User".to_string()),
        roles: vec!["owner".to_string()],
    }
}
