use axum::{
    extract::{Query, State},
    http::Method,
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::logic::{
    filter_products, operators_for_type, validate_operator_type, validate_product_query,
    ProductQueryParams, QueryParams, RequestError,
};
use crate::model::{Operator, Product, Property};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Answer for any verb other than GET on the catalog endpoints
pub async fn method_not_allowed(method: Method) -> ApiError {
    log::debug!("Rejecting {} request", method);
    RequestError::MethodNotAllowed.into()
}

pub async fn list_properties<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = store.get_properties().await?;
    Ok(Json(properties))
}

pub async fn list_operators<S: Store>(
    State(store): State<AppState<S>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<Operator>>, ApiError> {
    let property_type = validate_operator_type(&params)?;
    let operators = store.get_operators().await?;
    Ok(Json(operators_for_type(&operators, property_type)))
}

pub async fn list_products<S: Store>(
    State(store): State<AppState<S>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    log::debug!(
        "Product query: {}",
        ProductQueryParams::from_params(&params).to_query_string()
    );
    let properties = store.get_properties().await?;
    let operators = store.get_operators().await?;
    let query = validate_product_query(&params, &properties, &operators)?;

    let products = store.get_products().await?;
    Ok(Json(filter_products(products, &query)))
}
