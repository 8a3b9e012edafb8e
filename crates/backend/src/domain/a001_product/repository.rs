use chrono::Utc;
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Product {
            id: ProductId::new(uuid),
            name: m.name,
            price: m.price,
            image: m.image,
            category: m.category,
            stock: m.stock,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(product: &Product) -> anyhow::Result<Uuid> {
    let uuid = product.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(product.name.clone()),
        price: Set(product.price),
        image: Set(product.image.clone()),
        category: Set(product.category.clone()),
        stock: Set(product.stock),
        created_at: Set(Some(product.metadata.created_at)),
        updated_at: Set(Some(product.metadata.updated_at)),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Case-insensitive substring search on the product name.
/// Filtering happens application-side so Unicode names fold the same
/// way the storefront folds them.
pub async fn search_by_name(query: &str) -> anyhow::Result<Vec<Product>> {
    let all_items: Vec<Model> = Entity::find().all(conn()).await?;

    let items: Vec<Product> = all_items
        .into_iter()
        .filter(|m| name_matches(&m.name, query))
        .map(Into::into)
        .collect();

    Ok(items)
}

/// Name predicate shared by the substring search; case folding on both
/// sides keeps `"MILK"` and `"milk"` equivalent.
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Exact-name lookup ignoring case, used to resolve a recorded search
/// term back to the canonical catalog spelling.
pub async fn find_by_exact_name_ignore_case(name: &str) -> anyhow::Result<Option<Product>> {
    let name_lower = name.to_lowercase();

    let all_items: Vec<Model> = Entity::find().all(conn()).await?;

    Ok(all_items
        .into_iter()
        .find(|m| m.name.trim().to_lowercase() == name_lower)
        .map(Into::into))
}

/// Absolute stock replacement: the caller supplies the new value, the
/// stored one is overwritten without a floor check. Returns the
/// updated product, or `None` when the id does not resolve.
pub async fn update_stock(id: Uuid, stock: i32) -> anyhow::Result<Option<Product>> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Stock, Expr::value(stock))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    if result.rows_affected == 0 {
        return Ok(None);
    }
    get_by_id(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case() {
        assert!(name_matches("Milk", "MILK"));
        assert!(name_matches("Milk", "milk"));
        assert!(name_matches("Whole Milk", "mil"));
        assert!(!name_matches("Bread", "milk"));
    }
}
