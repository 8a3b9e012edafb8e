use super::repository;
use crate::shared::error::AppError;
use contracts::domain::common::EntityMetadata;
use contracts::domain::a002_order::{Order, OrderDto, OrderId, OrderStatus};
use uuid::Uuid;

/// Accept a checkout submission. The store assigns the authoritative
/// record id; the client-minted token is kept verbatim as a plain
/// field. The amount is trusted as submitted and stock availability is
/// not consulted here, matching the storefront contract.
pub async fn create(dto: OrderDto) -> Result<OrderId, AppError> {
    dto.validate().map_err(AppError::Validation)?;

    let status = OrderStatus::parse(dto.status.as_deref().unwrap_or_default())
        .map_err(AppError::Validation)?;

    let mut order = Order {
        id: OrderId::new_v4(),
        order_token: dto.order_id.unwrap_or_default(),
        username: dto.user_name.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        phone: dto.phone.unwrap_or_default(),
        address: dto.address.unwrap_or_default(),
        orderdate: dto.order_date.unwrap_or_else(chrono::Utc::now),
        orderamount: dto.order_amount.unwrap_or_default(),
        status,
        metadata: EntityMetadata::new(),
    };
    order.before_write();

    repository::insert(&order).await?;
    tracing::info!("Order {} created for {}", order.order_token, order.email);
    Ok(order.id)
}

/// Move an order to a new status. The incoming string must parse into
/// the closed set and the transition must be allowed by the table.
pub async fn update_status(id: Uuid, status: &str) -> Result<(), AppError> {
    let next = OrderStatus::parse(status).map_err(AppError::Validation)?;

    let order = repository::get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    if !order.status.can_transition_to(next) {
        return Err(AppError::Validation(format!(
            "Cannot change order status from {} to {}",
            order.status, next
        )));
    }

    repository::update_status(id, next).await?;
    Ok(())
}

pub async fn list_all() -> Result<Vec<Order>, AppError> {
    Ok(repository::list_all().await?)
}

pub async fn list_by_email(email: &str) -> Result<Vec<Order>, AppError> {
    Ok(repository::list_by_email(email).await?)
}
