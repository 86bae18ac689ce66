/// Validated outbound message, not yet attached to a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub content: String,
    pub media_url: Option<String>,
    pub sent_by: String,
}
