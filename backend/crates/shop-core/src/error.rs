use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid tenant id: {value} {location}")]
    InvalidTenantId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid conversation channel: {value} {location}")]
    InvalidChannel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid conversation status: {value} {location}")]
    InvalidConversationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid message direction: {value} {location}")]
    InvalidMessageDirection {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
