use crate::{Conversation, ConversationChannel, Message, MessageDirection, TenantId};

use chrono::Utc;

fn conversation() -> Conversation {
    Conversation::new(
        TenantId::new(3).unwrap(),
        ConversationChannel::Telegram,
        "tg-1001".to_string(),
        "user-1".to_string(),
    )
}

#[test]
fn given_new_conversation_then_open_without_messages() {
    let c = conversation();

    assert!(c.is_open());
    assert!(c.last_message_at.is_none());
    assert_eq!(c.last_activity(), c.created_at);
    assert_eq!(c.tenant_id.get(), 3);
}

#[test]
fn given_message_timestamp_then_last_activity_follows_it() {
    let mut c = conversation();
    let later = Utc::now() + chrono::Duration::seconds(30);
    c.last_message_at = Some(later);

    assert_eq!(c.last_activity(), later);
}

#[test]
fn given_conversation_when_outbound_message_then_inherits_scope() {
    let c = conversation();
    let m = Message::outbound(&c, "hello".to_string(), None, "user-2".to_string());

    assert_eq!(m.conversation_id, c.id);
    assert_eq!(m.tenant_id, c.tenant_id);
    assert_eq!(m.direction, MessageDirection::Outbound);
    assert_eq!(m.sent_by, "user-2");
}
