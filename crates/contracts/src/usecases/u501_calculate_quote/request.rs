use crate::domain::common::{optional_id, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Маржа компании по умолчанию, %
pub const DEFAULT_PROFIT_MARGIN_PERCENT: f64 = 20.0;

/// Данные клиента для коммерческого предложения (в расчёте не участвуют)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
}

impl CustomerInfo {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.phone.trim().is_empty()
            && self.email.trim().is_empty()
            && self.address.trim().is_empty()
            && self.notes.trim().is_empty()
    }
}

/// Выбор пользователя в форме расчёта
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    #[serde(default, deserialize_with = "optional_id")]
    pub shower_type_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub model_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub glass_type_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub glass_thickness_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub hardware_finish_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub hardware_type_id: Option<EntityId>,
    #[serde(default, deserialize_with = "optional_id")]
    pub seal_type_id: Option<EntityId>,

    /// Показывается в форме, в цену не входит
    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub seal_quantity: Option<u32>,

    #[serde(default, deserialize_with = "lenient::optional_quantity")]
    pub hardware_quantity: Option<u32>,

    /// Название дополнения → количество
    #[serde(default, deserialize_with = "lenient::quantity_map")]
    pub add_on_quantities: BTreeMap<String, u32>,

    /// Высота, м
    #[serde(default, deserialize_with = "lenient::number")]
    pub height: f64,
    /// Ширина, м
    #[serde(default, deserialize_with = "lenient::number")]
    pub width: f64,
    /// Боковая стенка угловой кабины, м
    #[serde(default, deserialize_with = "lenient::number")]
    pub length: f64,

    #[serde(default)]
    pub customer: CustomerInfo,
}

/// Настройки компании
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanySettings {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub profit_margin_percent: Option<f64>,
}

impl CompanySettings {
    pub fn with_profit_margin(profit_margin_percent: f64) -> Self {
        Self {
            company_name: None,
            profit_margin_percent: Some(profit_margin_percent),
        }
    }

    /// Маржа из настроек, либо 20%. Отрицательная маржа считается нулевой.
    pub fn effective_profit_margin_percent(&self) -> f64 {
        self.profit_margin_percent
            .filter(|p| p.is_finite())
            .map(|p| p.max(0.0))
            .unwrap_or(DEFAULT_PROFIT_MARGIN_PERCENT)
    }
}

/// Одно изменение в форме расчёта
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SelectionChange {
    ShowerType(Option<EntityId>),
    Model(Option<EntityId>),
    GlassType(Option<EntityId>),
    GlassThickness(Option<EntityId>),
    HardwareFinish(Option<EntityId>),
    HardwareType(Option<EntityId>),
    SealType(Option<EntityId>),
    SealQuantity(Option<u32>),
    HardwareQuantity(Option<u32>),
    Height(f64),
    Width(f64),
    Length(f64),
    AddOnQuantity { name: String, quantity: u32 },
    Customer(CustomerInfo),
    /// Подставить стандартные 2.1 × 1.5 м
    ApplyStandardDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default_selection() {
        let selection: Selection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, Selection::default());
        assert!(selection.customer.is_empty());
    }

    #[test]
    fn test_form_values_are_coerced() {
        let selection: Selection = serde_json::from_str(
            r#"{
                "shower_type_id": 2,
                "model_id": "",
                "glass_type_id": " 1 ",
                "height": "2,1",
                "width": "abc",
                "length": -1,
                "hardware_quantity": "2",
                "add_on_quantities": {"Towel Bar": "2", "Glass Shelf": -1}
            }"#,
        )
        .unwrap();
        assert_eq!(selection.shower_type_id, Some(EntityId::from(2)));
        assert_eq!(selection.model_id, None);
        assert_eq!(selection.glass_type_id, Some(EntityId::from("1")));
        assert_eq!(selection.height, 2.1);
        assert_eq!(selection.width, 0.0);
        assert_eq!(selection.length, 0.0);
        assert_eq!(selection.hardware_quantity, Some(2));
        assert_eq!(selection.add_on_quantities.get("Towel Bar"), Some(&2));
        assert_eq!(selection.add_on_quantities.get("Glass Shelf"), Some(&0));
    }

    #[test]
    fn test_profit_margin_default() {
        assert_eq!(CompanySettings::default().effective_profit_margin_percent(), 20.0);
        assert_eq!(CompanySettings::with_profit_margin(0.0).effective_profit_margin_percent(), 0.0);
        assert_eq!(
            CompanySettings::with_profit_margin(f64::NAN).effective_profit_margin_percent(),
            20.0
        );
        assert_eq!(CompanySettings::with_profit_margin(-5.0).effective_profit_margin_percent(), 0.0);
    }

    #[test]
    fn test_selection_change_wire_format() {
        let change: SelectionChange =
            serde_json::from_str(r#"{"field": "glass_type", "value": "3"}"#).unwrap();
        assert_eq!(change, SelectionChange::GlassType(Some(EntityId::from(3))));

        let change: SelectionChange =
            serde_json::from_str(r#"{"field": "apply_standard_dimensions"}"#).unwrap();
        assert_eq!(change, SelectionChange::ApplyStandardDimensions);

        let change: SelectionChange = serde_json::from_str(
            r#"{"field": "add_on_quantity", "value": {"name": "Towel Bar", "quantity": 2}}"#,
        )
        .unwrap();
        assert_eq!(
            change,
            SelectionChange::AddOnQuantity {
                name: "Towel Bar".to_string(),
                quantity: 2
            }
        );
    }
}
