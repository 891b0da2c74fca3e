use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Тип душевой кабины (справочник a101)
///
/// Определяет формулу площади и набор доступных моделей.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShowerType {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image_url: Option<String>,

    /// Собственная наценка типа, %. В формуле расчёта не участвует,
    /// используется наценка компании.
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub profit_margin_percent: Option<f64>,

    /// Ставка НДС типа. В формуле не участвует (см. `VAT_RATE`).
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub vat_rate: Option<f64>,

    /// Цена не считается автоматически, нужен индивидуальный расчёт
    #[serde(default, deserialize_with = "lenient::flag")]
    pub needs_custom_quote: bool,
}

impl ShowerType {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Угловая кабина: в названии есть "corner" (без учёта регистра)
    pub fn is_corner(&self) -> bool {
        is_corner_name(&self.name)
    }
}

/// Классификация по названию типа кабины
pub fn is_corner_name(name: &str) -> bool {
    name.to_lowercase().contains("corner")
}

impl CatalogEntity for ShowerType {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a101"
    }

    fn collection_name() -> &'static str {
        "shower_types"
    }

    fn element_name() -> &'static str {
        "Shower type"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_classification() {
        assert!(ShowerType::new(1, "Corner Enclosure").is_corner());
        assert!(ShowerType::new(2, "walk-in CORNER").is_corner());
        assert!(!ShowerType::new(3, "Standard").is_corner());
    }

    #[test]
    fn test_deserialize_from_rest_row() {
        let json = r#"{"id": 7, "name": "Corner", "profit_margin_percent": "25",
                        "vat_rate": null, "needs_custom_quote": 1}"#;
        let item: ShowerType = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, EntityId::from("7"));
        assert_eq!(item.profit_margin_percent, Some(25.0));
        assert_eq!(item.vat_rate, None);
        assert!(item.needs_custom_quote);
    }
}
