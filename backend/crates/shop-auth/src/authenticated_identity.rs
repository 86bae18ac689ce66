use crate::{Claims, TenantClaim};

use serde::Serialize;

/// User record attached to a request once its token has been verified
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedIdentity {
    pub user_id: String,
    pub tenant_id: Option<TenantClaim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedIdentity {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
            email: claims.email,
            name: claims.name,
            roles: claims.roles,
        }
    }
}

impl From<Claims> for AuthenticatedIdentity {
    fn from(claims: Claims) -> Self {
        Self::from_claims(claims)
    }
}
