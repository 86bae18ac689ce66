use shop_core::{Message, MessageDirection};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub tenant_id: i64,
    pub direction: MessageDirection,
    pub content: String,
    pub media_url: Option<String>,
    pub sent_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.to_string(),
            conversation_id: m.conversation_id.to_string(),
            tenant_id: m.tenant_id.get(),
            direction: m.direction,
            content: m.content,
            media_url: m.media_url,
            sent_by: m.sent_by,
            created_at: m.created_at,
        }
    }
}
