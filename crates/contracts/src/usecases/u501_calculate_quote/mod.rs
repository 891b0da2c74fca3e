pub mod add_ons;
pub mod aggregator;
pub mod area;
pub mod dimensions;
pub mod glass;
pub mod hardware;
mod matching;
pub mod request;
pub mod response;
pub mod seals;
pub mod session;

pub use aggregator::{compute_quote, VAT_RATE};
pub use request::{CompanySettings, CustomerInfo, Selection, SelectionChange};
pub use response::{MatchDebugInfo, QuoteBreakdown, QuoteResult};
pub use session::QuoteSession;

use crate::usecases::common::UseCaseMetadata;

pub struct CalculateQuote;

impl UseCaseMetadata for CalculateQuote {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "calculate_quote"
    }

    fn display_name() -> &'static str {
        "Quote calculation"
    }

    fn description() -> &'static str {
        "Area, component prices, VAT 18% and company profit margin for a shower enclosure"
    }
}
