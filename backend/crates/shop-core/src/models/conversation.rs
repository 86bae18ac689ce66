use crate::{ConversationChannel, ConversationStatus, TenantId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub tenant_id: TenantId,

    pub channel: ConversationChannel,
    /// Identifier of the customer on the originating channel
    pub channel_user_id: String,
    pub channel_username: Option<String>,
    /// Storefront customer this conversation is linked to, if known
    pub customer_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,

    pub status: ConversationStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

impl Conversation {
    pub fn new(
        tenant_id: TenantId,
        channel: ConversationChannel,
        channel_user_id: String,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            channel,
            channel_user_id,
            channel_username: None,
            customer_id: None,
            metadata: None,
            status: ConversationStatus::Open,
            created_at: now,
            updated_at: now,
            last_message_at: None,
            created_by,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ConversationStatus::Open
    }

    /// Most recent activity, used to order conversation lists
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_message_at.unwrap_or(self.created_at)
    }
}
