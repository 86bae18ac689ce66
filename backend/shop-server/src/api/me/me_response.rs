use shop_auth::{AuthenticatedIdentity, RawTenantId};

use serde::Serialize;

/// `user` and `tenantId` are `null` when unresolved
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: Option<AuthenticatedIdentity>,
    pub tenant_id: RawTenantId,
}
