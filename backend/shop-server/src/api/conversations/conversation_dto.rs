use shop_core::{Conversation, ConversationChannel, ConversationStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: String,
    pub tenant_id: i64,
    pub channel: ConversationChannel,
    pub channel_user_id: String,
    pub channel_username: Option<String>,
    pub customer_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

impl From<Conversation> for ConversationDto {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id.to_string(),
            tenant_id: c.tenant_id.get(),
            channel: c.channel,
            channel_user_id: c.channel_user_id,
            channel_username: c.channel_username,
            customer_id: c.customer_id,
            metadata: c.metadata,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
            last_message_at: c.last_message_at,
            created_by: c.created_by,
        }
    }
}
