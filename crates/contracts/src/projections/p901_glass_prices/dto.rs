use crate::domain::common::EntityId;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Строка прайса стекла (проекция p901)
///
/// Сопоставляется по названию типа стекла и толщине, а не по id справочников.
/// Переименование типа стекла в справочнике ломает все его цены.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlassPriceDto {
    #[serde(default)]
    pub id: EntityId,

    /// Название типа стекла (a103.name)
    #[serde(default, deserialize_with = "lenient::text")]
    pub glass_type: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub thickness_mm: f64,

    /// Цена за м²
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_per_m2: f64,
}

impl GlassPriceDto {
    pub fn new(glass_type: impl Into<String>, thickness_mm: f64, price_per_m2: f64) -> Self {
        Self {
            id: EntityId::default(),
            glass_type: glass_type.into(),
            thickness_mm,
            price_per_m2,
        }
    }

    /// Толщина сравнивается как число: "6" и "6.0" совпадают
    pub fn matches(&self, glass_type: &str, thickness_mm: f64) -> bool {
        self.glass_type == glass_type && self.thickness_mm == thickness_mm
    }
}
