pub mod me;
pub mod me_response;
