use crate::{
    AppState, create_conversation, get_conversation, health, list_channels, list_conversations,
    list_messages, me, metrics, middleware::authenticate::authenticate, send_message,
    update_conversation_status,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let crm = Router::new()
        .route("/channels", get(list_channels))
        .route(
            "/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route("/conversations/{id}", get(get_conversation))
        .route(
            "/conversations/{id}/status",
            patch(update_conversation_status),
        )
        .route(
            "/conversations/{id}/messages",
            get(list_messages).post(send_message),
        );

    let api = Router::new()
        .route("/me", get(me))
        .nest("/crm", crm)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let mut router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api);

    if state.prometheus.is_some() {
        router = router.route("/metrics", get(metrics::render_metrics));
    }

    router
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
