use shop_core::TenantId;

/// Validated, trusted tenant scope for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub tenant_id: TenantId,
    pub user_id: String,
    pub roles: Vec<String>,
}
