pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod middleware;
pub mod routes;


pub use api::{
    channels::{channel_list_response::ChannelListResponse, channels::list_channels},
    conversations::{
        conversation_dto::ConversationDto,
        conversation_list_response::ConversationListResponse,
        conversation_response::ConversationResponse,
        conversations::{
            create_conversation, get_conversation, list_conversations,
            update_conversation_status,
        },
        create_conversation_request::CreateConversationRequest,
        list_conversations_query::ListConversationsQuery,
        update_status_request::UpdateStatusRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        current_user::CurrentUser,
        tenant_scope::TenantScope,
        validated_body::{FromJsonBody, ValidatedBody},
    },
    me::{me::me, me_response::MeResponse},
    messages::{
        message_dto::MessageDto,
        message_list_response::MessageListResponse,
        message_response::MessageResponse,
        messages::{list_messages, send_message},
        send_message_request::SendMessageRequest,
    },
};
pub use app_state::AppState;
pub use metrics::CrmMetrics;

pub use crate::routes::build_router;
