pub mod channel_list_response;
pub mod channels;
