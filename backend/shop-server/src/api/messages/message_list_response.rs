use crate::MessageDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageDto>,
}
