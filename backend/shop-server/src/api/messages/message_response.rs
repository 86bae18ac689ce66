use crate::MessageDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: MessageDto,
}
