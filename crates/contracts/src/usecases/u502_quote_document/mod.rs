pub mod document;

pub use document::{QuoteDocument, QuoteLine};

use crate::usecases::common::UseCaseMetadata;

pub struct PrepareQuoteDocument;

impl UseCaseMetadata for PrepareQuoteDocument {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "quote_document"
    }

    fn display_name() -> &'static str {
        "Quote document"
    }

    fn description() -> &'static str {
        "Printable quote built from a calculated breakdown"
    }
}
