use crate::ApiError;

use shop_auth::AuthError;
use shop_core::{FieldViolation, ValidationErrors, ViolationKind};
use shop_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = render(ApiError::NotFound {
        message: "Conversation not found".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Conversation not found");
    assert!(json["error"].get("details").is_none());
}

#[tokio::test]
async fn test_validation_errors_render_every_field() {
    let errors = ValidationErrors::new(vec![
        FieldViolation::new("channel", ViolationKind::Missing),
        FieldViolation::new("channelUserId", ViolationKind::NotAString),
    ]);

    let (status, json) = render(ApiError::from(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "channel");
    let details = json["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "channel");
    assert_eq!(details[0]["reason"], "missing");
    assert_eq!(details[1]["field"], "channelUserId");
    assert_eq!(details[1]["reason"], "not_a_string");
}

#[tokio::test]
async fn test_unauthenticated_maps_to_401() {
    let error = ApiError::from(AuthError::Unauthenticated { location: here() });
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_expired_token_keeps_its_code() {
    let (status, json) = render(ApiError::from(AuthError::TokenExpired { location: here() })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_bad_tenant_id_maps_to_400_with_field() {
    let (status, json) = render(ApiError::from(AuthError::BadTenantId {
        value: "\"abc\"".into(),
        location: here(),
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_TENANT_ID");
    assert_eq!(json["error"]["field"], "tenantId");
}

#[tokio::test]
async fn test_rate_limit_maps_to_429() {
    let (status, json) = render(ApiError::from(AuthError::RateLimitExceeded {
        tenant_id: 3,
        limit: 10,
        window_secs: 60,
        location: here(),
    }))
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMIT_EXCEEDED");
    assert!(json["error"]["message"].as_str().unwrap().contains("10 per 60s"));
}

#[tokio::test]
async fn test_closed_conversation_maps_to_409() {
    let id = Uuid::new_v4();
    let (status, json) = render(ApiError::from(StoreError::ConversationClosed {
        id,
        location: here(),
    }))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONVERSATION_CLOSED");
}

#[tokio::test]
async fn test_tenant_mismatch_is_hidden_behind_internal_error() {
    let (status, json) = render(ApiError::from(StoreError::TenantMismatch {
        expected: 1,
        actual: 2,
        location: here(),
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Store operation failed");
}

#[tokio::test]
async fn test_invalid_uuid_maps_to_validation_error() {
    let err = Uuid::parse_str("not-a-uuid").unwrap_err();

    let (status, json) = render(ApiError::from(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "id");
}
