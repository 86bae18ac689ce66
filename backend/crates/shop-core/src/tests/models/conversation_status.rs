use crate::ConversationStatus;

use std::str::FromStr;

#[test]
fn test_conversation_status_as_str() {
    assert_eq!(ConversationStatus::Open.as_str(), "OPEN");
    assert_eq!(ConversationStatus::Closed.as_str(), "CLOSED");
}

#[test]
fn test_conversation_status_from_str() {
    assert_eq!(
        ConversationStatus::from_str("OPEN").unwrap(),
        ConversationStatus::Open
    );
    assert_eq!(
        ConversationStatus::from_str("CLOSED").unwrap(),
        ConversationStatus::Closed
    );
    assert!(ConversationStatus::from_str("open").is_err());
}

#[test]
fn test_conversation_status_default() {
    assert_eq!(ConversationStatus::default(), ConversationStatus::Open);
}
