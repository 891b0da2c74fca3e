use axum::Json;
use contracts::usecases::u501_calculate_quote::{QuoteResult, Selection};

use crate::shared::snapshot_store;
use crate::usecases::u501_calculate_quote::executor;

/// POST /api/quote/calculate
pub async fn calculate(Json(selection): Json<Selection>) -> Json<QuoteResult> {
    Json(executor::calculate(
        snapshot_store::get_snapshot(),
        snapshot_store::get_settings(),
        &selection,
    ))
}
