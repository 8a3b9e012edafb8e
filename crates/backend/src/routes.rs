use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::handlers;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Orders
        .route(
            "/api/orders",
            get(handlers::a002_order::list_all).post(handlers::a002_order::create),
        )
        .route("/api/orders/:id", put(handlers::a002_order::update_status))
        .route(
            "/api/orders/user/:email",
            get(handlers::a002_order::list_by_email),
        )
        // Products: search + stock adjustment
        .route(
            "/api/products/search",
            get(handlers::a001_product::search),
        )
        .route(
            "/api/products/:id/stock",
            put(handlers::a001_product::update_stock),
        )
        .route(
            "/api/products/testdata",
            post(handlers::a001_product::insert_test_data),
        )
        // Search ranking reports
        .route(
            "/api/products/top-search",
            get(handlers::a003_search_term::top_search),
        )
        .route(
            "/api/search/top",
            get(handlers::a003_search_term::top_terms),
        )
}
