use crate::{
    AppendedMessage, ConversationFilter, ConversationStore, MessageDraft,
    Result as StoreErrorResult, StoreError,
};

use shop_core::{Conversation, ConversationStatus, Message, TenantId};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct TenantPartition {
    conversations: HashMap<Uuid, Conversation>,
    messages: HashMap<Uuid, Vec<Message>>,
}

impl TenantPartition {
    #[track_caller]
    fn conversation_mut(&mut self, conversation_id: Uuid) -> StoreErrorResult<&mut Conversation> {
        self.conversations
            .get_mut(&conversation_id)
            .ok_or_else(|| not_found(conversation_id))
    }
}

#[track_caller]
fn not_found(conversation_id: Uuid) -> StoreError {
    StoreError::NotFound {
        entity: "Conversation",
        id: conversation_id,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Process-local store; contents are lost on restart
#[derive(Clone, Default)]
pub struct InMemoryConversationStore {
    partitions: Arc<RwLock<HashMap<TenantId, TenantPartition>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create_conversation(
        &self,
        tenant_id: TenantId,
        conversation: Conversation,
    ) -> StoreErrorResult<Conversation> {
        if conversation.tenant_id != tenant_id {
            return Err(StoreError::TenantMismatch {
                expected: tenant_id.get(),
                actual: conversation.tenant_id.get(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(tenant_id).or_default();
        partition
            .conversations
            .insert(conversation.id, conversation.clone());
        partition.messages.insert(conversation.id, Vec::new());

        debug!(
            "Stored conversation {} for tenant {}",
            conversation.id, tenant_id
        );
        Ok(conversation)
    }

    async fn list_conversations(
        &self,
        tenant_id: TenantId,
        filter: ConversationFilter,
    ) -> StoreErrorResult<Vec<Conversation>> {
        let partitions = self.partitions.read().await;
        let Some(partition) = partitions.get(&tenant_id) else {
            return Ok(Vec::new());
        };

        let mut conversations: Vec<Conversation> = partition
            .conversations
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        conversations.sort_by(|a, b| {
            b.last_activity()
                .cmp(&a.last_activity())
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(conversations)
    }

    async fn get_conversation(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
    ) -> StoreErrorResult<Conversation> {
        let partitions = self.partitions.read().await;
        partitions
            .get(&tenant_id)
            .and_then(|p| p.conversations.get(&conversation_id))
            .cloned()
            .ok_or_else(|| not_found(conversation_id))
    }

    async fn update_status(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
        status: ConversationStatus,
    ) -> StoreErrorResult<Conversation> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions
            .get_mut(&tenant_id)
            .ok_or_else(|| not_found(conversation_id))?;
        let conversation = partition.conversation_mut(conversation_id)?;

        if conversation.status != status {
            conversation.status = status;
            conversation.updated_at = Utc::now();
        }

        Ok(conversation.clone())
    }

    async fn append_message(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
        draft: MessageDraft,
    ) -> StoreErrorResult<AppendedMessage> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions
            .get_mut(&tenant_id)
            .ok_or_else(|| not_found(conversation_id))?;
        let conversation = partition.conversation_mut(conversation_id)?;

        if !conversation.is_open() {
            return Err(StoreError::ConversationClosed {
                id: conversation_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let MessageDraft {
            content,
            media_url,
            sent_by,
        } = draft;
        let message = Message::outbound(conversation, content, media_url, sent_by);
        conversation.last_message_at = Some(message.created_at);
        conversation.updated_at = message.created_at;
        let conversation = conversation.clone();

        partition
            .messages
            .entry(conversation_id)
            .or_default()
            .push(message.clone());

        Ok(AppendedMessage {
            conversation,
            message,
        })
    }

    async fn list_messages(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
    ) -> StoreErrorResult<Vec<Message>> {
        let partitions = self.partitions.read().await;
        let partition = partitions
            .get(&tenant_id)
            .filter(|p| p.conversations.contains_key(&conversation_id))
            .ok_or_else(|| not_found(conversation_id))?;

        Ok(partition
            .messages
            .get(&conversation_id)
            .cloned()
            .unwrap_or_default())
    }
}
