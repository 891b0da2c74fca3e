use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Разбивка цены
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteBreakdown {
    /// Площадь стекла, м²
    pub area: f64,
    pub glass_price: f64,
    pub hardware_price: f64,
    pub seals_price: f64,
    pub addons_price: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub profit: f64,
    pub total: f64,
    /// Ставка НДС, доля (0.18)
    pub vat_rate: f64,
    pub profit_margin_percent: f64,
}

/// Подбор цены стекла
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlassMatch {
    pub matched: bool,
    pub glass_type_name: Option<String>,
    pub thickness_mm: Option<f64>,
    /// "Clear / 8 mm"; пусто, если стекло не выбрано
    pub search_key: String,
    pub price_per_m2: Option<f64>,
    pub price: f64,
    /// "45 × 2 m² = 90"
    pub calculation: Option<String>,
}

/// Подбор цены фурнитуры
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HardwareMatch {
    pub matched: bool,
    pub hardware_type_name: String,
    pub finish_name: Option<String>,
    pub search_key: String,
    pub unit_price: Option<f64>,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SealMatch {
    pub seal_type_id: EntityId,
    pub matched: bool,
    pub unit_price: f64,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddOnMatch {
    pub name: String,
    pub matched: bool,
    pub unit_price: f64,
    pub quantity: u32,
    pub price: f64,
}

/// Диагностика подбора цен: какие ключи искали и что нашли
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchDebugInfo {
    pub glass: GlassMatch,
    pub hardware: HardwareMatch,
    pub seals: Vec<SealMatch>,
    pub add_ons: Vec<AddOnMatch>,
}

impl MatchDebugInfo {
    /// Выбранные позиции, для которых в прайсе не нашлось строки
    pub fn unmatched_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if !self.glass.matched && !self.glass.search_key.is_empty() {
            keys.push(format!("glass: {}", self.glass.search_key));
        }
        if !self.hardware.matched && self.hardware.finish_name.is_some() {
            keys.push(format!("hardware: {}", self.hardware.search_key));
        }
        keys.extend(
            self.seals
                .iter()
                .filter(|s| !s.matched)
                .map(|s| format!("seal: {}", s.seal_type_id)),
        );
        keys.extend(
            self.add_ons
                .iter()
                .filter(|a| !a.matched)
                .map(|a| format!("add-on: {}", a.name)),
        );
        keys
    }
}

/// Предупреждение о размерах
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionWarning {
    HeightAboveMaximum { value: f64, max: f64 },
    WidthAboveMaximum { value: f64, max: f64 },
    LengthAboveMaximum { value: f64, max: f64 },
}

impl std::fmt::Display for DimensionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeightAboveMaximum { value, max } => {
                write!(f, "Height {} m exceeds maximum {} m", value, max)
            }
            Self::WidthAboveMaximum { value, max } => {
                write!(f, "Width {} m exceeds maximum {} m", value, max)
            }
            Self::LengthAboveMaximum { value, max } => {
                write!(f, "Length {} m exceeds maximum {} m", value, max)
            }
        }
    }
}

/// Результат расчёта
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteResult {
    pub breakdown: QuoteBreakdown,
    pub debug: MatchDebugInfo,
    #[serde(default)]
    pub warnings: Vec<DimensionWarning>,
    /// Тип кабины требует индивидуального расчёта
    #[serde(default)]
    pub requires_custom_quote: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_keys_skip_unselected() {
        let debug = MatchDebugInfo::default();
        assert!(debug.unmatched_keys().is_empty());

        let debug = MatchDebugInfo {
            glass: GlassMatch {
                search_key: "Clear / 10 mm".to_string(),
                ..Default::default()
            },
            hardware: HardwareMatch {
                hardware_type_name: "Standard".to_string(),
                finish_name: Some("Gold".to_string()),
                search_key: "Standard / Gold".to_string(),
                ..Default::default()
            },
            seals: vec![SealMatch {
                seal_type_id: EntityId::from(9),
                ..Default::default()
            }],
            add_ons: vec![AddOnMatch {
                name: "Towel Bar".to_string(),
                matched: true,
                ..Default::default()
            }],
        };
        assert_eq!(
            debug.unmatched_keys(),
            vec!["glass: Clear / 10 mm", "hardware: Standard / Gold", "seal: 9"]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = DimensionWarning::HeightAboveMaximum { value: 2.5, max: 2.4 };
        assert_eq!(warning.to_string(), "Height 2.5 m exceeds maximum 2.4 m");
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "height_above_maximum");
    }
}
