pub mod common;
pub mod u501_calculate_quote;
pub mod u502_quote_document;
