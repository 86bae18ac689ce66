use shop_core::{
    ConversationChannel, ConversationStatus, FieldViolation, ValidationErrors, ViolationKind,
};
use shop_store::ConversationFilter;

use serde::Deserialize;

/// Query parameters for listing conversations
#[derive(Debug, Default, Deserialize)]
pub struct ListConversationsQuery {
    /// Channel wire value, e.g. `WHATSAPP`
    pub channel: Option<String>,
    /// `OPEN` or `CLOSED`
    pub status: Option<String>,
}

impl ListConversationsQuery {
    pub fn into_filter(self) -> Result<ConversationFilter, ValidationErrors> {
        let mut violations = Vec::new();

        let channel = self.channel.and_then(|s| {
            s.parse::<ConversationChannel>()
                .map_err(|_| {
                    violations.push(FieldViolation::new(
                        "channel",
                        ViolationKind::NotOneOf {
                            allowed: ConversationChannel::wire_values()
                                .into_iter()
                                .map(String::from)
                                .collect(),
                        },
                    ))
                })
                .ok()
        });

        let status = self.status.and_then(|s| {
            s.parse::<ConversationStatus>()
                .map_err(|_| {
                    violations.push(FieldViolation::new(
                        "status",
                        ViolationKind::NotOneOf {
                            allowed: vec!["OPEN".to_string(), "CLOSED".to_string()],
                        },
                    ))
                })
                .ok()
        });

        if !violations.is_empty() {
            return Err(ValidationErrors::new(violations));
        }

        Ok(ConversationFilter { channel, status })
    }
}
