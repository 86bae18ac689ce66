mod error;
mod extractors;
mod list_conversations_query;
mod requests;
