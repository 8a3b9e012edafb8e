use axum::Json;

use crate::domain::a003_search_term;
use crate::shared::error::AppError;
use contracts::domain::a003_search_term::{TopSearch, TopTermEntry};

/// Wire cap for the top-terms report.
const TOP_TERMS_LIMIT: usize = 10;

/// GET /api/products/top-search
pub async fn top_search() -> Result<Json<TopSearch>, AppError> {
    let top = a003_search_term::service::top_term().await?;
    Ok(Json(top))
}

/// GET /api/search/top
pub async fn top_terms() -> Result<Json<Vec<TopTermEntry>>, AppError> {
    let entries = a003_search_term::service::top_terms(TOP_TERMS_LIMIT).await?;
    Ok(Json(entries))
}
