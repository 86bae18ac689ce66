use crate::FromJsonBody;

use shop_core::{BodyValidator, ConversationStatus, CrmLimits, ValidationErrors};

use serde_json::Value;

/// Body of `PATCH /api/v1/crm/conversations/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    pub status: ConversationStatus,
}

impl FromJsonBody for UpdateStatusRequest {
    fn from_json(body: &Value, _limits: &CrmLimits) -> Result<Self, ValidationErrors> {
        let mut v = BodyValidator::new(body);
        let status = v.required_enum::<ConversationStatus>("status", &["OPEN", "CLOSED"]);

        match status {
            Some(status) if v.is_clean() => Ok(Self { status }),
            _ => Err(v.into_errors()),
        }
    }
}
