use shop_core::{Conversation, Message};

/// A stored message together with its conversation after the activity bump
#[derive(Debug, Clone, PartialEq)]
pub struct AppendedMessage {
    pub conversation: Conversation,
    pub message: Message,
}
