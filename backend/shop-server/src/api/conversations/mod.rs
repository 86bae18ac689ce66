pub mod conversation_dto;
pub mod conversation_list_response;
pub mod conversation_response;
pub mod conversations;
pub mod create_conversation_request;
pub mod list_conversations_query;
pub mod update_status_request;
