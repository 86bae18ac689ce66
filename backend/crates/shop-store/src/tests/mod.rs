
use shop_core::{Conversation, ConversationChannel, TenantId};

pub(crate) fn tenant(id: i64) -> TenantId {
    TenantId::new(id).unwrap()
}

pub(crate) fn conversation(tenant_id: TenantId, channel: ConversationChannel) -> Conversation {
    Conversation::new(
        tenant_id,
        channel,
        "channel-user-1".to_string(),
        "agent-1".to_string(),
    )
}
