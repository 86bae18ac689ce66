pub mod channels;
pub mod conversations;
pub mod error;
pub mod extractors;
pub mod me;
pub mod messages;
