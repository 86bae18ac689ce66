use crate::{AuthError, Result as AuthErrorResult, TenantClaim};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_TENANT_CLAIM_LENGTH: usize = 128;

/// JWT claims issued by the platform identity service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Tenant identifier, textual or numeric depending on the issuer
    #[serde(default, rename = "tenantId", alias = "tenant_id")]
    pub tenant_id: Option<TenantClaim>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification.
    ///
    /// The tenant claim is only bounded in size here. Whether it is a usable
    /// tenant id is decided per request by the resolver.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(TenantClaim::Text(text)) = &self.tenant_id
            && text.len() > MAX_TENANT_CLAIM_LENGTH
        {
            return Err(AuthError::InvalidClaim {
                claim: "tenantId".to_string(),
                message: "tenantId exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
