pub mod appended_message;
pub mod conversation_filter;
pub mod conversation_store;
pub mod error;
pub mod in_memory_store;
pub mod message_draft;

pub use appended_message::AppendedMessage;
pub use conversation_filter::ConversationFilter;
pub use conversation_store::ConversationStore;
pub use error::{Result, StoreError};
pub use in_memory_store::InMemoryConversationStore;
pub use message_draft::MessageDraft;

#[cfg(test)]
mod tests;
