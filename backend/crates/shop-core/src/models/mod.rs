pub mod conversation;
pub mod conversation_channel;
pub mod conversation_status;
pub mod message;
pub mod message_direction;
