use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{a001_product, a003_search_term};
use crate::shared::error::AppError;
use contracts::domain::a001_product::Product;

#[derive(Deserialize)]
pub struct SearchProductsQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct StockUpdateRequest {
    pub stock: i32,
}

/// GET /api/products/search?q=
///
/// Every search records its term for the ranking report before the
/// results come back, even when nothing matches.
pub async fn search(
    Query(params): Query<SearchProductsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let q = params.q.unwrap_or_default();

    a003_search_term::service::record(&q).await?;

    let products = a001_product::service::search(&q).await?;
    Ok(Json(products))
}

/// PUT /api/products/:id/stock
pub async fn update_stock(
    Path(id): Path<String>,
    Json(body): Json<StockUpdateRequest>,
) -> Result<Json<Product>, AppError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::Validation("Invalid product id".into()))?;

    let product = a001_product::service::update_stock(uuid, body.stock).await?;
    Ok(Json(product))
}

/// POST /api/products/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, AppError> {
    let inserted = a001_product::service::insert_test_data().await?;
    Ok(Json(json!({ "inserted": inserted })))
}
