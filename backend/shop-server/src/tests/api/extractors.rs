use crate::tests::{identity, test_state};
use crate::{ApiError, CurrentUser, SendMessageRequest, TenantScope, ValidatedBody};

use shop_auth::TenantClaim;

use axum::{
    body::Body,
    extract::{FromRequest, FromRequestParts},
    http::Request,
};
use serde_json::json;

#[tokio::test]
async fn test_current_user_without_identity_is_none() {
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert!(user.is_none());
}

#[tokio::test]
async fn test_current_user_returns_attached_identity_unchanged() {
    let attached = identity(Some(TenantClaim::Text("42".into())));
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(attached.clone());
    let (mut parts, _) = request.into_parts();

    let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    assert_eq!(user, Some(attached));
}

#[tokio::test]
async fn test_tenant_scope_parses_text_claim() {
    let state = test_state();
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request
        .extensions_mut()
        .insert(identity(Some(TenantClaim::Text("42".into()))));
    let (mut parts, _) = request.into_parts();

    let TenantScope(context) = TenantScope::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(context.tenant_id.get(), 42);
    assert_eq!(context.user_id, "user-1");
}

#[tokio::test]
async fn test_tenant_scope_without_identity_is_unauthorized() {
    let state = test_state();
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    let result = TenantScope::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "UNAUTHORIZED",
            ..
        })
    ));
}

#[tokio::test]
async fn test_tenant_scope_with_unparseable_claim_is_bad_tenant_id() {
    let state = test_state();
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request
        .extensions_mut()
        .insert(identity(Some(TenantClaim::Text("acme".into()))));
    let (mut parts, _) = request.into_parts();

    let result = TenantScope::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadTenantId { .. })));
}

#[tokio::test]
async fn test_tenant_scope_with_zero_tenant_is_bad_tenant_id() {
    let state = test_state();
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request
        .extensions_mut()
        .insert(identity(Some(TenantClaim::Integer(0))));
    let (mut parts, _) = request.into_parts();

    let result = TenantScope::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadTenantId { .. })));
}

#[tokio::test]
async fn test_validated_body_accepts_valid_json() {
    let state = test_state();
    let request = Request::builder()
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "content": "hi" }).to_string()))
        .unwrap();

    let ValidatedBody(req) = ValidatedBody::<SendMessageRequest>::from_request(request, &state)
        .await
        .unwrap();

    assert_eq!(req.content, "hi");
    assert_eq!(req.media_url, None);
}

#[tokio::test]
async fn test_validated_body_rejects_malformed_json_as_bad_request() {
    let state = test_state();
    let request = Request::builder()
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let result = ValidatedBody::<SendMessageRequest>::from_request(request, &state).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_validated_body_rejects_empty_content_as_validation_error() {
    let state = test_state();
    let request = Request::builder()
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "content": "" }).to_string()))
        .unwrap();

    let result = ValidatedBody::<SendMessageRequest>::from_request(request, &state).await;

    match result {
        Err(ApiError::Validation { field, details, .. }) => {
            assert_eq!(field.as_deref(), Some("content"));
            assert_eq!(details[0].reason, "empty");
        }
        _ => panic!("expected a validation error"),
    }
}
