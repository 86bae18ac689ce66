use crate::{ApiResult, ChannelListResponse, TenantScope};

use shop_core::ConversationChannel;

use axum::Json;

/// GET /api/v1/crm/channels
pub async fn list_channels(_tenant: TenantScope) -> ApiResult<Json<ChannelListResponse>> {
    Ok(Json(ChannelListResponse {
        channels: ConversationChannel::wire_values(),
    }))
}
