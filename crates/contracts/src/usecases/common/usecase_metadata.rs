/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "calculate_quote")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_calculate_quote"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_calculate_quote::CalculateQuote;
    use crate::usecases::u502_quote_document::PrepareQuoteDocument;

    #[test]
    fn test_full_names() {
        assert_eq!(CalculateQuote::full_name(), "u501_calculate_quote");
        assert_eq!(PrepareQuoteDocument::full_name(), "u502_quote_document");
    }
}
