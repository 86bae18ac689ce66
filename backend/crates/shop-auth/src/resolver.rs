//! Request identity resolution.
//!
//! Handlers receive the identity attached by the authentication middleware
//! (or `None`) and call these explicitly at entry.

use crate::{
    AuthError, AuthenticatedIdentity, RawTenantId, Result as AuthErrorResult, TenantContext,
};

use shop_core::TenantId;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

/// Pass-through accessor. `None` means unauthenticated; never fails.
pub fn resolve_current_user(
    identity: Option<&AuthenticatedIdentity>,
) -> Option<&AuthenticatedIdentity> {
    identity
}

/// Normalizes the tenant claim without rejecting anything.
///
/// A missing identity, a missing claim and unparseable text all yield
/// `RawTenantId::NotANumber`.
pub fn resolve_raw_tenant_id(identity: Option<&AuthenticatedIdentity>) -> RawTenantId {
    identity
        .and_then(|i| i.tenant_id.as_ref())
        .map(|claim| claim.normalize())
        .unwrap_or(RawTenantId::NotANumber)
}

/// Fail-fast tenant resolution used for every data access
#[track_caller]
pub fn resolve_tenant_id(identity: Option<&AuthenticatedIdentity>) -> AuthErrorResult<TenantId> {
    let Some(identity) = identity else {
        return Err(AuthError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let raw = resolve_raw_tenant_id(Some(identity));
    if let Some(tenant_id) = raw.as_option().and_then(|n| TenantId::new(n).ok()) {
        return Ok(tenant_id);
    }

    let value = identity
        .tenant_id
        .as_ref()
        .map(|claim| claim.to_string())
        .unwrap_or_else(|| "<missing>".to_string());
    warn!(
        "Rejecting request from user {}: bad tenant identifier {}",
        identity.user_id, value
    );

    Err(AuthError::BadTenantId {
        value,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub fn resolve_tenant_context(
    identity: Option<&AuthenticatedIdentity>,
) -> AuthErrorResult<TenantContext> {
    let tenant_id = resolve_tenant_id(identity)?;

    // resolve_tenant_id already rejected a missing identity
    let (user_id, roles) = identity
        .map(|i| (i.user_id.clone(), i.roles.clone()))
        .unwrap_or_default();

    Ok(TenantContext {
        tenant_id,
        user_id,
        roles,
    })
}
