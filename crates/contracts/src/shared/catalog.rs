//! Снимок справочников и прайсов для сессии расчёта
//!
//! Загружается один раз (REST-клиентом или бэкендом из файла) и дальше
//! только читается. Отсутствующие коллекции считаются пустыми.

use crate::domain::a101_shower_type::aggregate::ShowerType;
use crate::domain::a102_shower_model::aggregate::ShowerModel;
use crate::domain::a103_glass_type::aggregate::GlassType;
use crate::domain::a104_glass_thickness::aggregate::GlassThickness;
use crate::domain::a105_hardware_finish::aggregate::HardwareFinish;
use crate::domain::a106_hardware_type::aggregate::HardwareType;
use crate::domain::a107_seal_type::aggregate::SealType;
use crate::domain::a108_add_on::aggregate::AddOn;
use crate::domain::common::{find_by_id, EntityId};
use crate::projections::p901_glass_prices::dto::GlassPriceDto;
use crate::projections::p902_hardware_prices::dto::HardwarePriceDto;
use crate::projections::p903_seal_prices::dto::SealPriceDto;
use crate::projections::p904_addon_prices::dto::AddOnPriceDto;
use serde::{Deserialize, Serialize};

/// Справочники каталога
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub shower_types: Vec<ShowerType>,
    #[serde(default)]
    pub models: Vec<ShowerModel>,
    #[serde(default)]
    pub glass_types: Vec<GlassType>,
    #[serde(default)]
    pub glass_thicknesses: Vec<GlassThickness>,
    #[serde(default)]
    pub finishes: Vec<HardwareFinish>,
    #[serde(default)]
    pub hardware_types: Vec<HardwareType>,
    #[serde(default)]
    pub seal_types: Vec<SealType>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl Catalog {
    pub fn shower_type(&self, id: Option<&EntityId>) -> Option<&ShowerType> {
        id.and_then(|id| find_by_id(&self.shower_types, id))
    }

    pub fn model(&self, id: Option<&EntityId>) -> Option<&ShowerModel> {
        id.and_then(|id| find_by_id(&self.models, id))
    }

    pub fn glass_thickness(&self, id: Option<&EntityId>) -> Option<&GlassThickness> {
        id.and_then(|id| find_by_id(&self.glass_thicknesses, id))
    }

    /// Модели, относящиеся к типу кабины
    pub fn models_for_shower_type(&self, shower_type_id: &EntityId) -> Vec<&ShowerModel> {
        self.models
            .iter()
            .filter(|m| m.belongs_to(shower_type_id))
            .collect()
    }
}

/// Прайсы
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingTables {
    #[serde(default)]
    pub glass: Vec<GlassPriceDto>,
    #[serde(default)]
    pub hardware: Vec<HardwarePriceDto>,
    #[serde(default)]
    pub seals: Vec<SealPriceDto>,
    #[serde(default)]
    pub add_ons: Vec<AddOnPriceDto>,
}

/// Полный снимок данных для расчёта
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteSnapshot {
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub pricing: PricingTables,
}

impl QuoteSnapshot {
    pub fn new(catalog: Catalog, pricing: PricingTables) -> Self {
        Self { catalog, pricing }
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.shower_types.is_empty()
            && self.pricing.glass.is_empty()
            && self.pricing.hardware.is_empty()
            && self.pricing.seals.is_empty()
            && self.pricing.add_ons.is_empty()
    }
}
