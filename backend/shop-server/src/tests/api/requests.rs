use crate::{CreateConversationRequest, FromJsonBody, SendMessageRequest, UpdateStatusRequest};

use shop_core::{ConversationChannel, ConversationStatus, CrmLimits, ViolationKind};

use serde_json::json;

// =========================================================================
// CreateConversationRequest
// =========================================================================

#[test]
fn given_channel_and_channel_user_id_only_when_validated_then_accepted() {
    let body = json!({ "channel": "WHATSAPP", "channelUserId": "+15550100" });

    let req = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap();

    assert_eq!(req.channel, ConversationChannel::Whatsapp);
    assert_eq!(req.channel_user_id, "+15550100");
    assert_eq!(req.channel_username, None);
    assert_eq!(req.customer_id, None);
    assert_eq!(req.metadata, None);
}

#[test]
fn given_every_field_when_validated_then_all_kept() {
    let body = json!({
        "channel": "EMAIL",
        "channelUserId": "buyer@example.test",
        "channelUsername": "Buyer",
        "customerId": "cus_123",
        "metadata": { "source": "checkout", "attempt": 2 }
    });

    let req = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap();

    assert_eq!(req.channel_username.as_deref(), Some("Buyer"));
    assert_eq!(req.customer_id.as_deref(), Some("cus_123"));
    assert_eq!(req.metadata.unwrap()["attempt"], 2);
}

#[test]
fn given_missing_channel_user_id_when_validated_then_rejected_naming_field() {
    let body = json!({ "channel": "SMS" });

    let errors = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("channelUserId"));
    assert_eq!(errors.violations().len(), 1);
}

#[test]
fn given_unknown_channel_when_validated_then_rejected() {
    let body = json!({ "channel": "unknown-channel", "channelUserId": "u-1" });

    let errors = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("channel"));
    assert!(errors.to_string().contains("WEB_CHAT"));
}

#[test]
fn given_lowercase_channel_when_validated_then_rejected() {
    let body = json!({ "channel": "sms", "channelUserId": "u-1" });

    let result = CreateConversationRequest::from_json(&body, &CrmLimits::default());

    assert!(result.is_err());
}

#[test]
fn given_empty_channel_user_id_when_validated_then_accepted() {
    let body = json!({ "channel": "TELEGRAM", "channelUserId": "" });

    let result = CreateConversationRequest::from_json(&body, &CrmLimits::default());

    assert!(result.is_ok());
}

#[test]
fn given_null_optional_fields_when_validated_then_treated_as_absent() {
    let body = json!({
        "channel": "WEB_CHAT",
        "channelUserId": "visitor-9",
        "channelUsername": null,
        "metadata": null
    });

    let req = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap();

    assert_eq!(req.channel_username, None);
    assert_eq!(req.metadata, None);
}

#[test]
fn given_non_object_metadata_when_validated_then_rejected() {
    let body = json!({ "channel": "SMS", "channelUserId": "u", "metadata": ["a"] });

    let errors = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("metadata"));
}

#[test]
fn given_numeric_channel_when_validated_then_not_a_string() {
    let body = json!({ "channel": 5, "channelUserId": "u-1" });

    let errors = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert_eq!(errors.violations().len(), 1);
    assert_eq!(errors.violations()[0].field, "channel");
    assert_eq!(errors.violations()[0].kind, ViolationKind::NotAString);
}

#[test]
fn given_several_bad_fields_when_validated_then_each_reported() {
    let body = json!({ "channel": 7, "channelUserId": 12, "customerId": false });

    let errors = CreateConversationRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("channel"));
    assert!(errors.has_violation("channelUserId"));
    assert!(errors.has_violation("customerId"));
}

#[test]
fn given_unknown_fields_when_validated_then_ignored() {
    let body = json!({ "channel": "SMS", "channelUserId": "u", "priority": "high" });

    assert!(CreateConversationRequest::from_json(&body, &CrmLimits::default()).is_ok());
}

#[test]
fn given_identifier_over_limit_when_validated_then_rejected() {
    let limits = CrmLimits {
        max_identifier_length: 16,
        ..CrmLimits::default()
    };
    let body = json!({ "channel": "SMS", "channelUserId": "x".repeat(17) });

    let errors = CreateConversationRequest::from_json(&body, &limits).unwrap_err();

    assert!(errors.has_violation("channelUserId"));
}

#[test]
fn given_array_body_when_validated_then_rejected_as_body() {
    let errors =
        CreateConversationRequest::from_json(&json!([1, 2]), &CrmLimits::default()).unwrap_err();

    assert_eq!(errors.first_field(), Some("body"));
    assert_eq!(errors.violations().len(), 1);
}

// =========================================================================
// SendMessageRequest
// =========================================================================

#[test]
fn given_content_only_when_validated_then_accepted() {
    let body = json!({ "content": "Your order has shipped" });

    let req = SendMessageRequest::from_json(&body, &CrmLimits::default()).unwrap();

    assert_eq!(req.content, "Your order has shipped");
    assert_eq!(req.media_url, None);
}

#[test]
fn given_empty_content_when_validated_then_rejected() {
    let body = json!({ "content": "" });

    let errors = SendMessageRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("content"));
}

#[test]
fn given_missing_content_when_validated_then_rejected() {
    let body = json!({ "mediaUrl": "https://cdn.example.test/a.png" });

    let errors = SendMessageRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("content"));
}

#[test]
fn given_media_url_when_validated_then_kept() {
    let body = json!({ "content": "see photo", "mediaUrl": "https://cdn.example.test/a.png" });

    let req = SendMessageRequest::from_json(&body, &CrmLimits::default()).unwrap();

    assert_eq!(req.media_url.as_deref(), Some("https://cdn.example.test/a.png"));
}

#[test]
fn given_non_string_media_url_when_validated_then_rejected() {
    let body = json!({ "content": "hi", "mediaUrl": 42 });

    let errors = SendMessageRequest::from_json(&body, &CrmLimits::default()).unwrap_err();

    assert!(errors.has_violation("mediaUrl"));
}

#[test]
fn given_content_over_limit_when_validated_then_rejected() {
    let limits = CrmLimits {
        max_content_length: 5,
        ..CrmLimits::default()
    };

    let body = json!({ "content": "toolong" });
    let errors = SendMessageRequest::from_json(&body, &limits).unwrap_err();

    assert!(errors.has_violation("content"));
}

// =========================================================================
// UpdateStatusRequest
// =========================================================================

#[test]
fn given_closed_status_when_validated_then_accepted() {
    let req = UpdateStatusRequest::from_json(&json!({ "status": "CLOSED" }), &CrmLimits::default())
        .unwrap();

    assert_eq!(req.status, ConversationStatus::Closed);
}

#[test]
fn given_unknown_status_when_validated_then_rejected() {
    let result =
        UpdateStatusRequest::from_json(&json!({ "status": "ARCHIVED" }), &CrmLimits::default());

    assert!(result.is_err());
}
