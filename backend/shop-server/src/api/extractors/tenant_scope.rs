use crate::{ApiError, AppState};

use shop_auth::{AuthenticatedIdentity, TenantContext, resolve_tenant_context};

use axum::{extract::FromRequestParts, http::request::Parts};

/// Validated tenant scope for the request.
///
/// Rejects with 401 when there is no identity and 400 `BAD_TENANT_ID` when
/// the identity's tenant claim is not a positive integer.
pub struct TenantScope(pub TenantContext);

impl FromRequestParts<AppState> for TenantScope {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<AuthenticatedIdentity>();

        match resolve_tenant_context(identity) {
            Ok(context) => {
                log::debug!(
                    "Request scoped to tenant {} for user {}",
                    context.tenant_id,
                    context.user_id
                );
                Ok(TenantScope(context))
            }
            Err(e) => {
                state.metrics.auth_rejected(e.error_code());
                Err(ApiError::from(e))
            }
        }
    }
}
