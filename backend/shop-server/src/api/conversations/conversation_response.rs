use crate::ConversationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub conversation: ConversationDto,
}
