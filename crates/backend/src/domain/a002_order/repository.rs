use chrono::Utc;
use contracts::domain::a002_order::{Order, OrderId, OrderStatus};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_token: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub orderdate: chrono::DateTime<chrono::Utc>,
    pub orderamount: f64,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        // Writes only ever store members of the closed set; an
        // unreadable value degrades to pending rather than failing the
        // whole listing.
        let status = OrderStatus::parse(&m.status).unwrap_or(OrderStatus::Pending);

        Order {
            id: OrderId::new(uuid),
            order_token: m.order_token,
            username: m.username,
            email: m.email,
            phone: m.phone,
            address: m.address,
            orderdate: m.orderdate,
            orderamount: m.orderamount,
            status,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(order: &Order) -> anyhow::Result<Uuid> {
    let uuid = order.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        order_token: Set(order.order_token.clone()),
        username: Set(order.username.clone()),
        email: Set(order.email.clone()),
        phone: Set(order.phone.clone()),
        address: Set(order.address.clone()),
        orderdate: Set(order.orderdate),
        orderamount: Set(order.orderamount),
        status: Set(order.status.as_str().to_string()),
        created_at: Set(Some(order.metadata.created_at)),
        updated_at: Set(Some(order.metadata.updated_at)),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Overwrite only the status column. Returns false when the id does
/// not resolve.
pub async fn update_status(id: Uuid, status: OrderStatus) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status.as_str()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// All orders, newest insertion first (administrative review).
pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    let items: Vec<Order> = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Orders belonging to one customer, newest order date first. The
/// email comparison is case-sensitive equality on the stored value.
pub async fn list_by_email(email: &str) -> anyhow::Result<Vec<Order>> {
    let items: Vec<Order> = Entity::find()
        .filter(Column::Email.eq(email))
        .order_by_desc(Column::Orderdate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
