use crate::AppState;
use crate::error::Result as ServerErrorResult;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counters for CRM and auth activity
#[derive(Clone)]
pub struct CrmMetrics {
    prefix: &'static str,
    auth_prefix: &'static str,
}

impl CrmMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "shop_crm",
            auth_prefix: "shop_auth",
        }
    }

    pub fn conversation_created(&self, channel: &str) {
        counter!(format!("{}.conversations.created", self.prefix), "channel" => channel.to_string())
            .increment(1);
    }

    pub fn message_sent(&self, channel: &str) {
        counter!(format!("{}.messages.sent", self.prefix), "channel" => channel.to_string())
            .increment(1);
    }

    /// A request body failed field validation
    pub fn validation_rejected(&self, field: &str) {
        counter!(format!("{}.validation.rejected", self.prefix), "field" => field.to_string())
            .increment(1);
    }

    pub fn rate_limited(&self) {
        counter!(format!("{}.rate_limited", self.prefix)).increment(1);
    }

    /// `reason` is the machine-readable auth error code
    pub fn auth_rejected(&self, reason: &str) {
        counter!(format!("{}.rejected", self.auth_prefix), "reason" => reason.to_string())
            .increment(1);
    }
}

impl Default for CrmMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global Prometheus recorder. Call once at startup.
pub fn install_prometheus() -> ServerErrorResult<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// GET /metrics - Prometheus scrape endpoint
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
