use contracts::domain::a003_search_term::SearchTerm;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_search_term")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub term: String,
    pub count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SearchTerm {
    fn from(m: Model) -> Self {
        SearchTerm {
            term: m.term,
            count: m.count,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Record one occurrence of an already-normalized term: atomic
/// in-place increment, falling back to a fresh row at count 1 when the
/// term was never seen.
pub async fn record(term: &str) -> anyhow::Result<()> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Count, Expr::col(Column::Count).add(1))
        .filter(Column::Term.eq(term))
        .exec(conn())
        .await?;

    if result.rows_affected == 0 {
        let fresh = SearchTerm::first_occurrence(term);
        let active = ActiveModel {
            term: Set(fresh.term),
            count: Set(fresh.count),
        };
        active.insert(conn()).await?;
    }
    Ok(())
}

pub async fn list_all() -> anyhow::Result<Vec<SearchTerm>> {
    let items: Vec<SearchTerm> = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Single highest counter; term order breaks count ties
/// deterministically.
pub async fn top_one() -> anyhow::Result<Option<SearchTerm>> {
    let result = Entity::find()
        .order_by_desc(Column::Count)
        .order_by_asc(Column::Term)
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}
