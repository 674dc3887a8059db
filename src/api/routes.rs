use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Catalog endpoints are read-only
        .route(
            "/properties",
            get(handlers::list_properties::<S>).fallback(handlers::method_not_allowed),
        )
        .route(
            "/operators",
            get(handlers::list_operators::<S>).fallback(handlers::method_not_allowed),
        )
        .route(
            "/products",
            get(handlers::list_products::<S>).fallback(handlers::method_not_allowed),
        )
}
