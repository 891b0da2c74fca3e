use contracts::shared::catalog::QuoteSnapshot;
use contracts::usecases::u501_calculate_quote::{
    compute_quote, CompanySettings, QuoteResult, Selection,
};
use std::time::Instant;

/// Расчёт по загруженному снимку
///
/// Ненайденные цены не ошибка: логируем каждую и отдаём 0 в разбивке.
pub fn calculate(
    snapshot: &QuoteSnapshot,
    settings: &CompanySettings,
    selection: &Selection,
) -> QuoteResult {
    let started = Instant::now();
    let result = compute_quote(selection, &snapshot.catalog, &snapshot.pricing, settings);

    for key in result.debug.unmatched_keys() {
        tracing::warn!("Price not found for {}", key);
    }

    tracing::debug!(
        "Quote calculated in {:?}: area {} m², subtotal {}, total {}",
        started.elapsed(),
        result.breakdown.area,
        result.breakdown.subtotal,
        result.breakdown.total
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;

    fn snapshot() -> QuoteSnapshot {
        serde_json::from_str(include_str!("../../../data/quote_snapshot.example.json")).unwrap()
    }

    #[test]
    fn test_example_snapshot_quote() {
        let selection = Selection {
            shower_type_id: Some(EntityId::from(1)),
            glass_type_id: Some(EntityId::from(1)),
            glass_thickness_id: Some(EntityId::from(2)),
            hardware_finish_id: Some(EntityId::from(1)),
            seal_type_id: Some(EntityId::from(2)),
            height: 2.0,
            width: 1.0,
            ..Default::default()
        };
        let result = calculate(&snapshot(), &CompanySettings::default(), &selection);
        let b = result.breakdown;
        assert_eq!(b.glass_price, 900.0);
        assert_eq!(b.hardware_price, 350.0);
        assert_eq!(b.seals_price, 45.0);
        assert_eq!(b.subtotal, 1295.0);
        assert!((b.total - 1295.0 * 1.18 * 1.2).abs() < 1e-6);
        assert!(result.debug.unmatched_keys().is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let selection: Selection =
            serde_json::from_str(r#"{"shower_type_id": 1, "glass_type_id": 1, "height": 2, "width": 1}"#)
                .unwrap();
        let result = calculate(&QuoteSnapshot::default(), &CompanySettings::default(), &selection);
        assert_eq!(result.breakdown.total, 0.0);
    }
}
