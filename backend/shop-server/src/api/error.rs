//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Internal details are logged, never returned.

use shop_auth::AuthError;
use shop_core::{FieldViolationBody, ValidationErrors};
use shop_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every rejected field, for request body validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolationBody>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unusable credentials (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Identity present but its tenant claim is unusable (400)
    #[error("Bad tenant id: {message} {location}")]
    BadTenantId {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        details: Vec<FieldViolationBody>,
        location: ErrorLocation,
    },

    /// Request conflicts with the resource's current state (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Per-tenant send limit reached (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Request body over the configured size limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Machine-readable code rendered in the response body
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { code, .. } => *code,
            ApiError::BadTenantId { .. } => "BAD_TENANT_ID",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Conflict { code, .. } => *code,
            ApiError::RateLimited { .. } => "RATE_LIMIT_EXCEEDED",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::BadTenantId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::BadTenantId { message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: Some("tenantId".into()),
                details: Vec::new(),
            },
            ApiError::Validation {
                message,
                field,
                details,
                ..
            } => ApiErrorBody {
                code: code.into(),
                message,
                field,
                details,
            },
            ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::RateLimited { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
                details: Vec::new(),
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth failures to API errors without leaking token internals
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::BadTenantId { value, .. } => ApiError::BadTenantId {
                message: format!("Tenant identifier {} is not a valid tenant id", value),
                location,
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Message rate limit of {} per {}s exceeded",
                    limit, window_secs
                ),
                location,
            },
            AuthError::InvalidClaim { message, .. } => ApiError::Unauthorized {
                code: "INVALID_CLAIM",
                message,
                location,
            },
            other => {
                log::debug!("Authentication failure: {}", other);
                ApiError::Unauthorized {
                    code: other.error_code(),
                    message: unauthorized_message(&other).to_string(),
                    location,
                }
            }
        }
    }
}

fn unauthorized_message(e: &AuthError) -> &'static str {
    match e {
        AuthError::TokenExpired { .. } => "Token expired",
        AuthError::Unauthenticated { .. } => "Authentication required",
        AuthError::InvalidScheme { .. } => "Authorization header must use the Bearer scheme",
        _ => "Invalid token",
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            StoreError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{} {} not found", entity, id),
                location,
            },
            StoreError::ConversationClosed { id, .. } => ApiError::Conflict {
                code: "CONVERSATION_CLOSED",
                message: format!("Conversation {} is closed", id),
                location,
            },
            other => {
                // Don't expose internal store details to clients
                log::error!("Store error: {}", other);
                ApiError::Internal {
                    message: "Store operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: errors.to_string(),
            field: errors.first_field().map(str::to_string),
            details: errors.details(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: Some("id".into()),
            details: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed or oversized JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = rejection.body_text();

        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge { message, location }
        } else {
            ApiError::BadRequest { message, location }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
