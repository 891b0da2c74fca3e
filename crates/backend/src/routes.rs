use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOG SNAPSHOT (read-only)
        // ========================================
        .route("/api/quote/catalog", get(handlers::catalog::get_snapshot))
        .route("/api/quote/models", get(handlers::catalog::list_models))
        // ========================================
        // QUOTE
        // ========================================
        .route(
            "/api/quote/calculate",
            post(handlers::u501_calculate_quote::calculate),
        )
        .route(
            "/api/quote/document",
            post(handlers::u502_quote_document::prepare),
        )
}
