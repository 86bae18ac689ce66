use crate::FromJsonBody;

use shop_core::{BodyValidator, ConversationChannel, CrmLimits, ValidationErrors};

use serde_json::{Map, Value};

/// Body of `POST /api/v1/crm/conversations`.
///
/// Wire fields: `channel` (required, one of the channel enum values),
/// `channelUserId` (required text, may be empty), `channelUsername`,
/// `customerId` (optional text) and `metadata` (optional object).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateConversationRequest {
    pub channel: ConversationChannel,
    pub channel_user_id: String,
    pub channel_username: Option<String>,
    pub customer_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl FromJsonBody for CreateConversationRequest {
    fn from_json(body: &Value, limits: &CrmLimits) -> Result<Self, ValidationErrors> {
        let mut v = BodyValidator::new(body);

        let channel =
            v.required_enum::<ConversationChannel>("channel", &ConversationChannel::wire_values());
        let channel_user_id = v.required_string("channelUserId", limits.max_identifier_length);
        let channel_username = v.optional_string("channelUsername", limits.max_identifier_length);
        let customer_id = v.optional_string("customerId", limits.max_identifier_length);
        let metadata = v.optional_object("metadata", limits.max_metadata_entries);

        match (channel, channel_user_id) {
            (Some(channel), Some(channel_user_id)) if v.is_clean() => Ok(Self {
                channel,
                channel_user_id,
                channel_username,
                customer_id,
                metadata,
            }),
            _ => Err(v.into_errors()),
        }
    }
}
