use crate::{AppendedMessage, ConversationFilter, MessageDraft, Result as StoreErrorResult};

use shop_core::{Conversation, ConversationStatus, Message, TenantId};

use async_trait::async_trait;
use uuid::Uuid;

/// Tenant-partitioned conversation repository.
///
/// Every operation takes the caller's `TenantId`. Records owned by another
/// tenant are reported as `NotFound`, never returned.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Fails with `TenantMismatch` if `conversation.tenant_id` is not `tenant_id`
    async fn create_conversation(
        &self,
        tenant_id: TenantId,
        conversation: Conversation,
    ) -> StoreErrorResult<Conversation>;

    /// Newest activity first, then newest created, then by id
    async fn list_conversations(
        &self,
        tenant_id: TenantId,
        filter: ConversationFilter,
    ) -> StoreErrorResult<Vec<Conversation>>;

    async fn get_conversation(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
    ) -> StoreErrorResult<Conversation>;

    async fn update_status(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
        status: ConversationStatus,
    ) -> StoreErrorResult<Conversation>;

    /// Appends an outbound message and bumps the conversation's activity
    /// timestamps, returning both. Closed conversations reject with
    /// `ConversationClosed`.
    async fn append_message(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
        draft: MessageDraft,
    ) -> StoreErrorResult<AppendedMessage>;

    /// Oldest first
    async fn list_messages(
        &self,
        tenant_id: TenantId,
        conversation_id: Uuid,
    ) -> StoreErrorResult<Vec<Message>>;
}
