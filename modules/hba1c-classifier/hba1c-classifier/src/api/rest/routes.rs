use std::sync::Arc;

use axum::routing::any;
use axum::{Extension, Router};
use hba1c_classifier_sdk::Hba1cClassifierApi;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::rest::{error, handlers};

/// Build the classifier router.
///
/// The handler answers on `/` for every method and is also the fallback, so
/// any path reaches it. Panics inside the handler become a 500 JSON body.
pub fn router(service: Arc<dyn Hba1cClassifierApi>) -> Router {
    Router::new()
        .route("/", any(handlers::classify))
        .fallback(handlers::classify)
        .layer(Extension(service))
        .layer(CatchPanicLayer::custom(error::handle_panic))
}
