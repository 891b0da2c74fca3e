use chrono::Utc;
use contracts::shared::catalog::QuoteSnapshot;
use contracts::usecases::u501_calculate_quote::{CompanySettings, Selection};
use contracts::usecases::u502_quote_document::QuoteDocument;
use uuid::Uuid;

use crate::usecases::u501_calculate_quote::executor::calculate;

/// Коммерческое предложение: новый номер и дата на каждый вызов
pub fn prepare(
    snapshot: &QuoteSnapshot,
    settings: &CompanySettings,
    selection: &Selection,
) -> QuoteDocument {
    let result = calculate(snapshot, settings, selection);
    let document = QuoteDocument::build(
        selection,
        &snapshot.catalog,
        settings,
        &result,
        Uuid::new_v4(),
        Utc::now(),
    );

    tracing::info!(
        "Quote {} prepared: {} lines, total {}{}",
        document.quote_number,
        document.lines.len(),
        document.total_display,
        if document.requires_custom_quote {
            " (custom quote required)"
        } else {
            ""
        }
    );
    document
}
