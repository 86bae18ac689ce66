//! Message REST API handlers

use crate::{
    ApiResult, AppState, MessageDto, MessageListResponse, MessageResponse, SendMessageRequest,
    TenantScope, ValidatedBody,
};

use shop_store::{AppendedMessage, MessageDraft};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/crm/conversations/{id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    Path(conversation_id): Path<String>,
    ValidatedBody(req): ValidatedBody<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let conversation_uuid = Uuid::parse_str(&conversation_id)?;

    if let Err(e) = state.rate_limiter.check(tenant.tenant_id) {
        state.metrics.rate_limited();
        return Err(e.into());
    }

    let draft = MessageDraft {
        content: req.content,
        media_url: req.media_url,
        sent_by: tenant.user_id,
    };
    let AppendedMessage {
        conversation,
        message,
    } = state
        .store
        .append_message(tenant.tenant_id, conversation_uuid, draft)
        .await?;

    state.metrics.message_sent(conversation.channel.as_str());
    log::debug!(
        "Sent message {} on conversation {} (tenant {})",
        message.id,
        conversation_uuid,
        tenant.tenant_id
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: message.into(),
        }),
    ))
}

/// GET /api/v1/crm/conversations/{id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    TenantScope(tenant): TenantScope,
    Path(conversation_id): Path<String>,
) -> ApiResult<Json<MessageListResponse>> {
    let conversation_uuid = Uuid::parse_str(&conversation_id)?;

    let messages = state
        .store
        .list_messages(tenant.tenant_id, conversation_uuid)
        .await?;

    Ok(Json(MessageListResponse {
        messages: messages.into_iter().map(MessageDto::from).collect(),
    }))
}
