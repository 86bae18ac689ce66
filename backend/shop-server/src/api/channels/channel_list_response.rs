use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChannelListResponse {
    pub channels: Vec<&'static str>,
}
