use axum::Json;
use contracts::usecases::u501_calculate_quote::Selection;
use contracts::usecases::u502_quote_document::QuoteDocument;

use crate::shared::snapshot_store;
use crate::usecases::u502_quote_document::executor;

/// POST /api/quote/document
pub async fn prepare(Json(selection): Json<Selection>) -> Json<QuoteDocument> {
    Json(executor::prepare(
        snapshot_store::get_snapshot(),
        snapshot_store::get_settings(),
        &selection,
    ))
}
