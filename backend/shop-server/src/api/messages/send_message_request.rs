use crate::FromJsonBody;

use shop_core::{BodyValidator, CrmLimits, ValidationErrors};

use serde_json::Value;

/// Body of `POST /api/v1/crm/conversations/{id}/messages`.
///
/// `content` must be non-empty text; `mediaUrl` is optional text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub content: String,
    pub media_url: Option<String>,
}

impl FromJsonBody for SendMessageRequest {
    fn from_json(body: &Value, limits: &CrmLimits) -> Result<Self, ValidationErrors> {
        let mut v = BodyValidator::new(body);

        let content = v.required_non_empty_string("content", limits.max_content_length);
        let media_url = v.optional_string("mediaUrl", limits.max_identifier_length);

        match content {
            Some(content) if v.is_clean() => Ok(Self { content, media_url }),
            _ => Err(v.into_errors()),
        }
    }
}
