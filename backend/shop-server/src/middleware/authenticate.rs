//! Bearer token authentication.
//!
//! Runs before every `/api/v1` handler. A valid token attaches an
//! `AuthenticatedIdentity` to the request extensions; a request with no
//! `Authorization` header passes through unauthenticated and the resolvers
//! decide what that means for the route.

use crate::{ApiError, AppState};

use shop_auth::{AuthError, AuthenticatedIdentity, extract_bearer_token};

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;
use log::{debug, warn};

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(ref validator) = state.jwt_validator else {
        request.extensions_mut().insert(state.dev_identity.clone());
        return Ok(next.run(request).await);
    };

    let Some(header) = request.headers().get(AUTHORIZATION) else {
        debug!("No Authorization header on {}", request.uri().path());
        return Ok(next.run(request).await);
    };

    let identity = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken {
            message: "Authorization header is not valid ASCII".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
        .and_then(extract_bearer_token)
        .and_then(|token| validator.validate(token))
        .map(AuthenticatedIdentity::from_claims)
        .map_err(|e| {
            warn!("Rejecting request to {}: {}", request.uri().path(), e);
            state.metrics.auth_rejected(e.error_code());
            ApiError::from(e)
        })?;

    debug!("Authenticated user {}", identity.user_id);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
