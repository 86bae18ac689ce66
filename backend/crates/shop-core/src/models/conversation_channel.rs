use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Messaging surface a conversation originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationChannel {
    /// Chat widget embedded in the storefront
    WebChat,
    Whatsapp,
    FacebookMessenger,
    InstagramDm,
    Telegram,
    Sms,
    Email,
}

impl ConversationChannel {
    pub const ALL: [ConversationChannel; 7] = [
        Self::WebChat,
        Self::Whatsapp,
        Self::FacebookMessenger,
        Self::InstagramDm,
        Self::Telegram,
        Self::Sms,
        Self::Email,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebChat => "WEB_CHAT",
            Self::Whatsapp => "WHATSAPP",
            Self::FacebookMessenger => "FACEBOOK_MESSENGER",
            Self::InstagramDm => "INSTAGRAM_DM",
            Self::Telegram => "TELEGRAM",
            Self::Sms => "SMS",
            Self::Email => "EMAIL",
        }
    }

    /// All wire values, in declaration order
    pub fn wire_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl FromStr for ConversationChannel {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidChannel {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ConversationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
