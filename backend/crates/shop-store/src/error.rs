use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: Uuid,
        location: ErrorLocation,
    },

    #[error("Conversation {id} is closed {location}")]
    ConversationClosed { id: Uuid, location: ErrorLocation },

    #[error("Record belongs to tenant {actual}, not tenant {expected} {location}")]
    TenantMismatch {
        expected: i64,
        actual: i64,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
