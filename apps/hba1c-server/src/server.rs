//! HTTP host: middleware stack and serving loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Request, Response, StatusCode};
use axum::routing::get;
use hba1c_classifier::{Hba1cClassifierApi, Service};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing::field::Empty;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::signals;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates a UUID v4 request id when the caller did not send one.
#[derive(Clone, Copy, Default)]
struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the full application router.
///
/// Runtime execution order (outermost -> innermost):
///   1. `SetRequestId`       - Generate/extract request ID
///   2. `PropagateRequestId` - Copy request ID to the response
///   3. Trace              - Per-request span and completion log
///   4. Timeout            - Request timeout (504)
///   5. `BodyLimit`          - Cap on buffered body size
///   6. Router             - `/healthz`, classifier everywhere else
pub fn build_router(config: &ServerConfig) -> Router {
    build_router_with_timeout(config, config.request_timeout())
}

fn build_router_with_timeout(config: &ServerConfig, timeout: Duration) -> Router {
    let service: Arc<dyn Hba1cClassifierApi> = Arc::new(Service::new());

    let mut router = hba1c_classifier::router(service).route("/healthz", get(health_check));

    router = router.layer(DefaultBodyLimit::max(config.body_limit_bytes));
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        timeout,
    ));
    router = apply_trace_layer(router);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}

async fn health_check() -> &'static str {
    "ok"
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
                tracing::info!(status = res.status().as_u16(), "request completed");
            }),
    )
}

/// Bind the listener and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the address is invalid, binding fails, or the server
/// stops with an I/O error.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let router = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(signals::shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
