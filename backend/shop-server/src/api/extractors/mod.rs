pub mod current_user;
pub mod tenant_scope;
pub mod validated_body;
