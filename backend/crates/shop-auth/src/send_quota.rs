/// How many messages one tenant may send per window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendQuota {
    pub max_messages: u32,
    pub window_secs: u64,
}

impl Default for SendQuota {
    fn default() -> Self {
        Self {
            max_messages: 100,
            window_secs: 60,
        }
    }
}
