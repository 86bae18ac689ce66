use crate::{BodyValidator, ConversationChannel, ViolationKind};

use serde_json::json;

#[test]
fn given_non_object_body_then_single_body_violation() {
    let body = json!(["not", "an", "object"]);
    let mut v = BodyValidator::new(&body);

    assert!(v.required_string("content", 10).is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations().len(), 1);
    assert_eq!(errors.first_field().as_deref(), Some("body"));
}

#[test]
fn given_null_optional_field_then_treated_as_absent() {
    let body = json!({ "mediaUrl": null });
    let mut v = BodyValidator::new(&body);

    assert!(v.optional_string("mediaUrl", 10).is_none());
    assert!(v.is_clean());
}

#[test]
fn given_null_required_field_then_missing() {
    let body = json!({ "content": null });
    let mut v = BodyValidator::new(&body);

    assert!(v.required_string("content", 10).is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations()[0].kind, ViolationKind::Missing);
}

#[test]
fn given_number_for_string_field_then_not_a_string() {
    let body = json!({ "channelUserId": 12345 });
    let mut v = BodyValidator::new(&body);

    assert!(v.required_string("channelUserId", 10).is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations()[0].kind, ViolationKind::NotAString);
}

#[test]
fn given_empty_string_then_required_accepts_but_non_empty_rejects() {
    let body = json!({ "a": "", "b": "" });
    let mut v = BodyValidator::new(&body);

    assert_eq!(v.required_string("a", 10).as_deref(), Some(""));
    assert!(v.required_non_empty_string("b", 10).is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations().len(), 1);
    assert_eq!(errors.violations()[0].kind, ViolationKind::Empty);
}

#[test]
fn given_string_over_limit_then_too_long_counts_characters() {
    let body = json!({ "ok": "ééé", "long": "abcd" });
    let mut v = BodyValidator::new(&body);

    assert_eq!(v.required_string("ok", 3).as_deref(), Some("ééé"));
    assert!(v.required_string("long", 3).is_none());
    let errors = v.into_errors();
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::TooLong { max: 3 }
    );
}

#[test]
fn given_enum_value_outside_set_then_not_one_of() {
    let body = json!({ "channel": "unknown-channel" });
    let mut v = BodyValidator::new(&body);
    let allowed = ConversationChannel::wire_values();

    let parsed = v.required_enum::<ConversationChannel>("channel", &allowed);

    assert!(parsed.is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations()[0].kind.code(), "not_one_of");
}

#[test]
fn given_number_for_enum_field_then_not_a_string() {
    let body = json!({ "channel": 5 });
    let mut v = BodyValidator::new(&body);
    let allowed = ConversationChannel::wire_values();

    let parsed = v.required_enum::<ConversationChannel>("channel", &allowed);

    assert!(parsed.is_none());
    let errors = v.into_errors();
    assert_eq!(errors.violations().len(), 1);
    assert_eq!(errors.violations()[0].kind, ViolationKind::NotAString);
}

#[test]
fn given_enum_member_then_parsed() {
    let body = json!({ "channel": "SMS" });
    let mut v = BodyValidator::new(&body);
    let allowed = ConversationChannel::wire_values();

    let parsed = v.required_enum::<ConversationChannel>("channel", &allowed);

    assert_eq!(parsed, Some(ConversationChannel::Sms));
    assert!(v.is_clean());
}

#[test]
fn given_metadata_array_then_not_an_object() {
    let body = json!({ "metadata": [1, 2] });
    let mut v = BodyValidator::new(&body);

    assert!(v.optional_object("metadata", 4).is_none());
    assert_eq!(v.into_errors().first_field().as_deref(), Some("metadata"));
}

#[test]
fn given_metadata_with_too_many_entries_then_rejected() {
    let body = json!({ "metadata": { "a": 1, "b": 2, "c": 3 } });
    let mut v = BodyValidator::new(&body);

    assert!(v.optional_object("metadata", 2).is_none());
    let errors = v.into_errors();
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::TooManyEntries { max: 2 }
    );
}

#[test]
fn given_several_bad_fields_then_all_reported_in_order() {
    let body = json!({ "channel": 1, "metadata": "x" });
    let mut v = BodyValidator::new(&body);
    let allowed = ConversationChannel::wire_values();

    let _ = v.required_enum::<ConversationChannel>("channel", &allowed);
    let _ = v.required_string("channelUserId", 10);
    let _ = v.optional_object("metadata", 10);

    let errors = v.into_errors();
    let fields: Vec<&str> = errors.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["channel", "channelUserId", "metadata"]);
}
