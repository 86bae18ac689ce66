pub mod body_validator;
pub mod crm_limits;
pub mod field_violation;
