//! Axum extractors for request identity

use shop_auth::{AuthenticatedIdentity, resolve_current_user};

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity attached by the authentication middleware, if any.
///
/// Never rejects; `None` means the request is unauthenticated.
pub struct CurrentUser(pub Option<AuthenticatedIdentity>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<AuthenticatedIdentity>();
        Ok(CurrentUser(resolve_current_user(identity).cloned()))
    }
}
