pub mod authenticated_identity;
pub mod bearer_token;
pub mod claims;
pub mod error;
pub mod jwt_key;
pub mod jwt_validator;
pub mod resolver;
pub mod send_quota;
pub mod tenant_claim;
pub mod tenant_context;
pub mod tenant_rate_limiter;

pub use authenticated_identity::AuthenticatedIdentity;
pub use bearer_token::extract_bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_key::JwtKey;
pub use jwt_validator::JwtValidator;
pub use resolver::{
    resolve_current_user, resolve_raw_tenant_id, resolve_tenant_context, resolve_tenant_id,
};
pub use send_quota::SendQuota;
pub use tenant_claim::{RawTenantId, TenantClaim};
pub use tenant_context::TenantContext;
pub use tenant_rate_limiter::TenantRateLimiter;
