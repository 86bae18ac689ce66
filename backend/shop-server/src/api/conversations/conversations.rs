//! Conversation REST API handlers

use crate::{
    ApiError, ApiResult, AppState, ConversationDto, ConversationListResponse,
    ConversationResponse, CreateConversationRequest, ListConversationsQuery, TenantScope,
    UpdateStatusRequest, ValidatedBody,
};

use shop_core::Conversation;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/crm/conversations
pub async fn create_conversation(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    ValidatedBody(req): ValidatedBody<CreateConversationRequest>,
) -> ApiResult<(StatusCode, Json<ConversationResponse>)> {
    let mut conversation = Conversation::new(
        tenant.tenant_id,
        req.channel,
        req.channel_user_id,
        tenant.user_id,
    );
    conversation.channel_username = req.channel_username;
    conversation.customer_id = req.customer_id;
    conversation.metadata = req.metadata;

    let conversation = state
        .store
        .create_conversation(tenant.tenant_id, conversation)
        .await?;

    state
        .metrics
        .conversation_created(conversation.channel.as_str());
    log::info!(
        "Created {} conversation {} for tenant {}",
        conversation.channel,
        conversation.id,
        tenant.tenant_id
    );

    Ok((
        StatusCode::CREATED,
        Json(ConversationResponse {
            conversation: conversation.into(),
        }),
    ))
}

/// GET /api/v1/crm/conversations?channel=&status=
pub async fn list_conversations(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    Query(query): Query<ListConversationsQuery>,
) -> ApiResult<Json<ConversationListResponse>> {
    let filter = query.into_filter().map_err(ApiError::from)?;

    let conversations = state
        .store
        .list_conversations(tenant.tenant_id, filter)
        .await?;

    Ok(Json(ConversationListResponse {
        conversations: conversations.into_iter().map(ConversationDto::from).collect(),
    }))
}

/// GET /api/v1/crm/conversations/{id}
pub async fn get_conversation(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<ConversationResponse>> {
    let conversation_uuid = Uuid::parse_str(&conversation_id)?;

    let conversation = state
        .store
        .get_conversation(tenant.tenant_id, conversation_uuid)
        .await?;

    Ok(Json(ConversationResponse {
        conversation: conversation.into(),
    }))
}

/// PATCH /api/v1/crm/conversations/{id}/status
pub async fn update_conversation_status(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    Path(conversation_id): Path<String>,
    ValidatedBody(req): ValidatedBody<UpdateStatusRequest>,
) -> ApiResult<Json<ConversationResponse>> {
    let conversation_uuid = Uuid::parse_str(&conversation_id)?;

    let conversation = state
        .store
        .update_status(tenant.tenant_id, conversation_uuid, req.status)
        .await?;

    log::info!(
        "Conversation {} is now {} (tenant {}, user {})",
        conversation.id,
        conversation.status,
        tenant.tenant_id,
        tenant.user_id
    );

    Ok(Json(ConversationResponse {
        conversation: conversation.into(),
    }))
}
