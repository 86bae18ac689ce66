use crate::ConversationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationDto>,
}
