use crate::{Conversation, MessageDirection, TenantId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub tenant_id: TenantId,

    pub direction: MessageDirection,
    pub content: String,
    pub media_url: Option<String>,

    pub sent_by: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Message sent by a tenant user into an existing conversation
    pub fn outbound(
        conversation: &Conversation,
        content: String,
        media_url: Option<String>,
        sent_by: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            conversation_id: conversation.id,
            tenant_id: conversation.tenant_id,
            direction: MessageDirection::Outbound,
            content,
            media_url,
            sent_by,
            created_at: Utc::now(),
        }
    }
}
