use crate::domain::common::EntityId;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Строка прайса фурнитуры (проекция p902)
///
/// Ключ: название типа фурнитуры + название покрытия.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HardwarePriceDto {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub hardware_type: String,

    /// Название покрытия (a105.name)
    #[serde(default, deserialize_with = "lenient::text")]
    pub finish: String,

    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub unit_price: Option<f64>,

    /// Старое имя поля цены, встречается в части ответов API
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub price: Option<f64>,

    /// Количество по умолчанию для комплекта
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub quantity: Option<u32>,
}

impl HardwarePriceDto {
    pub fn new(hardware_type: impl Into<String>, finish: impl Into<String>, unit_price: f64) -> Self {
        Self {
            hardware_type: hardware_type.into(),
            finish: finish.into(),
            unit_price: Some(unit_price),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Цена за единицу: `unit_price`, иначе `price`, иначе 0
    pub fn effective_unit_price(&self) -> f64 {
        lenient::non_negative(self.unit_price.or(self.price).unwrap_or(0.0))
    }

    pub fn matches(&self, hardware_type: &str, finish: &str) -> bool {
        self.hardware_type == hardware_type && self.finish == finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_or_price() {
        let a: HardwarePriceDto =
            serde_json::from_str(r#"{"hardware_type": "Standard", "finish": "Nickel", "unit_price": "120"}"#)
                .unwrap();
        let b: HardwarePriceDto =
            serde_json::from_str(r#"{"hardware_type": "Standard", "finish": "Nickel", "price": 80}"#)
                .unwrap();
        let c: HardwarePriceDto = serde_json::from_str(
            r#"{"hardware_type": "Standard", "finish": "Nickel", "unit_price": 100, "price": 80}"#,
        )
        .unwrap();
        assert_eq!(a.effective_unit_price(), 120.0);
        assert_eq!(b.effective_unit_price(), 80.0);
        assert_eq!(c.effective_unit_price(), 100.0);
    }

    #[test]
    fn test_embedded_quantity() {
        let row: HardwarePriceDto =
            serde_json::from_str(r#"{"hardware_type": "Standard", "finish": "Black", "price": 10, "quantity": "4"}"#)
                .unwrap();
        assert_eq!(row.quantity, Some(4));
    }
}
