use crate::{CurrentUser, MeResponse};

use shop_auth::resolve_raw_tenant_id;

use axum::Json;

/// GET /api/v1/me
///
/// Never rejects: reports the identity and normalized tenant claim exactly
/// as the non-failing resolvers see them.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    let tenant_id = resolve_raw_tenant_id(user.as_ref());

    Json(MeResponse { user, tenant_id })
}
