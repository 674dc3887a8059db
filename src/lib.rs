pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{
    filter_products, is_operator_valid, operators_for_type, validate_operator_type,
    validate_product_query, ProductFilterEvaluator, ProductQuery, ProductQueryParams,
    QueryParams, RequestError, RequestErrorKind,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{Catalog, CatalogError, CatalogStore, MemoryStore, Store};

use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the application router over a loaded catalog
pub fn build_app(catalog: Catalog, config: &crate::config::AppConfig) -> axum::Router {
    let store = Arc::new(MemoryStore::new(catalog));
    let router = api::routes::create_router();

    let router = match &config.server.static_dir {
        Some(dir) => {
            log::info!("Serving static assets from {}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router.with_state(store)
}
