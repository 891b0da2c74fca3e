use super::matching::pick_row;
use super::response::SealMatch;
use crate::domain::common::EntityId;
use crate::projections::p903_seal_prices::dto::SealPriceDto;
use crate::shared::lenient::non_negative;

/// Уплотнитель всегда считается одной штукой
pub const SEAL_QUANTITY: u32 = 1;

/// Цена уплотнителя по id типа
///
/// Пустой выбор даёт пустой список; ненайденный id даёт запись с `matched = false`.
// TODO: поле seal_quantity в форме пока не влияет на цену, уточнить у заказчика
pub fn match_seal_price(seal_type_id: Option<&EntityId>, prices: &[SealPriceDto]) -> Vec<SealMatch> {
    let Some(seal_type_id) = seal_type_id.and_then(EntityId::non_empty) else {
        return Vec::new();
    };

    let row = pick_row(
        prices.iter().filter(|p| &p.seal_type_id == seal_type_id),
        |p: &SealPriceDto| p.unit_price,
        |p: &SealPriceDto| &p.id,
    );

    let record = match row {
        Some(row) => {
            let unit_price = non_negative(row.unit_price);
            SealMatch {
                seal_type_id: seal_type_id.clone(),
                matched: true,
                unit_price,
                quantity: SEAL_QUANTITY,
                price: unit_price * SEAL_QUANTITY as f64,
            }
        }
        None => SealMatch {
            seal_type_id: seal_type_id.clone(),
            matched: false,
            unit_price: 0.0,
            quantity: SEAL_QUANTITY,
            price: 0.0,
        },
    };
    vec![record]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_seal_selected() {
        let prices = vec![SealPriceDto::new(1, 60.0)];
        assert!(match_seal_price(None, &prices).is_empty());
        assert!(match_seal_price(Some(&EntityId::new("")), &prices).is_empty());
    }

    #[test]
    fn test_seal_match_by_normalized_id() {
        let prices: Vec<SealPriceDto> =
            serde_json::from_str(r#"[{"id": 1, "seal_type_id": "2", "unit_price": "45"}]"#).unwrap();
        let result = match_seal_price(Some(&EntityId::from(2)), &prices);
        assert_eq!(result.len(), 1);
        assert!(result[0].matched);
        assert_eq!(result[0].price, 45.0);
        assert_eq!(result[0].quantity, 1);
    }

    #[test]
    fn test_seal_miss() {
        let prices = vec![SealPriceDto::new(1, 60.0)];
        let result = match_seal_price(Some(&EntityId::from(5)), &prices);
        assert_eq!(result.len(), 1);
        assert!(!result[0].matched);
        assert_eq!(result[0].price, 0.0);
    }
}
