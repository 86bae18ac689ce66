pub mod error;
pub mod models;
pub mod tenant_id;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::conversation::Conversation;
pub use models::conversation_channel::ConversationChannel;
pub use models::conversation_status::ConversationStatus;
pub use models::message::Message;
pub use models::message_direction::MessageDirection;
pub use tenant_id::TenantId;
pub use validation::body_validator::BodyValidator;
pub use validation::crm_limits::CrmLimits;
pub use validation::field_violation::{
    FieldViolation, FieldViolationBody, ValidationErrors, ViolationKind,
};
