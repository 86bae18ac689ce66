use shop_core::{Conversation, ConversationChannel, ConversationStatus};

/// Optional narrowing of a conversation listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    pub channel: Option<ConversationChannel>,
    pub status: Option<ConversationStatus>,
}

impl ConversationFilter {
    pub fn matches(&self, conversation: &Conversation) -> bool {
        self.channel.is_none_or(|c| conversation.channel == c)
            && self.status.is_none_or(|s| conversation.status == s)
    }
}
