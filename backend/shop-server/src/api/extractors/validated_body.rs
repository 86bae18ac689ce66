use crate::{ApiError, AppState};

use shop_core::{CrmLimits, ValidationErrors};

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Request body that validates itself from untyped JSON.
///
/// Implementations report every offending field at once rather than
/// stopping at the first.
pub trait FromJsonBody: Sized {
    fn from_json(body: &Value, limits: &CrmLimits) -> Result<Self, ValidationErrors>;
}

/// JSON body validated before the handler runs.
///
/// Malformed JSON is a 400 `BAD_REQUEST`, field failures are a 400
/// `VALIDATION_ERROR` listing each field, and oversized bodies are a 413.
pub struct ValidatedBody<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedBody<T>
where
    T: FromJsonBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;

        T::from_json(&body, &state.limits)
            .map(ValidatedBody)
            .map_err(|errors| {
                for violation in errors.violations() {
                    state.metrics.validation_rejected(&violation.field);
                }
                ApiError::from(errors)
            })
    }
}
