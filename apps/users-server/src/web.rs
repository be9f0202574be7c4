use std::time::Duration;

use axum::{response::Json, routing::get, Router};
use runtime::ServerConfig;
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

use crate::request_id;

const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Add `/health` to the module routes and wrap everything in the HTTP middleware stack.
///
/// `.layer()` wraps from the inside out, so a request passes the layers in
/// reverse order: body limit, CORS, request id generation, propagation,
/// trace span, timeout. The span is built after the id exists.
pub fn build_router(routes: Router, server: &ServerConfig) -> Router {
    let x_request_id = request_id::header();

    let mut router = routes.route("/health", get(health_check));

    // 1. Per-request timeout (optional), inside the span so timeouts are traced
    if server.timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(server.timeout_sec)));
    }

    // 2. Trace with request_id/method/uri
    router = router.layer(request_id::create_trace_layer());

    // 3. Copy x-request-id onto the response
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 4. Generate x-request-id when missing
    router = router.layer(SetRequestIdLayer::new(
        x_request_id,
        request_id::MakeReqId,
    ));

    // 5. CORS (optional)
    if server.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    // 6. Body limit
    router.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
