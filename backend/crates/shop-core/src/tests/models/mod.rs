mod conversation;
mod conversation_channel;
mod conversation_status;
