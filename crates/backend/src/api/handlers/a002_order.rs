use axum::{extract::Path, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a002_order;
use crate::shared::error::AppError;
use contracts::domain::a002_order::{Order, OrderDto};

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// POST /api/orders
pub async fn create(Json(dto): Json<OrderDto>) -> Result<Json<serde_json::Value>, AppError> {
    let id = a002_order::service::create(dto).await?;
    tracing::debug!("Order persisted with id {}", id.value());
    Ok(Json(
        json!({ "success": true, "message": "Order placed successfully" }),
    ))
}

/// PUT /api/orders/:id
pub async fn update_status(
    Path(id): Path<String>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let uuid =
        uuid::Uuid::parse_str(&id).map_err(|_| AppError::Validation("Invalid order id".into()))?;

    a002_order::service::update_status(uuid, &body.status).await?;
    Ok(Json(json!({ "success": true, "message": "Order updated" })))
}

/// GET /api/orders
pub async fn list_all() -> Result<Json<Vec<Order>>, AppError> {
    let orders = a002_order::service::list_all().await?;
    Ok(Json(orders))
}

/// GET /api/orders/user/:email
///
/// The email arrives URL-encoded; the path extractor hands it over
/// already decoded. No match is an empty list, not an error.
pub async fn list_by_email(Path(email): Path<String>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = a002_order::service::list_by_email(&email).await?;
    Ok(Json(orders))
}
