use crate::ConversationChannel;

use std::str::FromStr;

#[test]
fn test_channel_round_trips_through_wire_string() {
    for channel in ConversationChannel::ALL {
        assert_eq!(
            ConversationChannel::from_str(channel.as_str()).unwrap(),
            channel
        );
    }
}

#[test]
fn test_channel_rejects_unknown_value() {
    assert!(ConversationChannel::from_str("unknown-channel").is_err());
    assert!(ConversationChannel::from_str("web_chat").is_err());
}

#[test]
fn test_channel_serde_uses_screaming_snake_case() {
    let json = serde_json::to_string(&ConversationChannel::InstagramDm).unwrap();
    assert_eq!(json, "\"INSTAGRAM_DM\"");

    let parsed: ConversationChannel = serde_json::from_str("\"WEB_CHAT\"").unwrap();
    assert_eq!(parsed, ConversationChannel::WebChat);
}

#[test]
fn test_wire_values_lists_every_channel() {
    let values = ConversationChannel::wire_values();
    assert_eq!(values.len(), ConversationChannel::ALL.len());
    assert!(values.contains(&"WHATSAPP"));
}
