use crate::domain::common::EntityId;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Строка прайса уплотнителя (проекция p903)
///
/// В отличие от стекла и фурнитуры сопоставляется по id типа уплотнителя.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SealPriceDto {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default)]
    pub seal_type_id: EntityId,

    #[serde(default, deserialize_with = "lenient::number")]
    pub unit_price: f64,
}

impl SealPriceDto {
    pub fn new(seal_type_id: impl Into<EntityId>, unit_price: f64) -> Self {
        Self {
            id: EntityId::default(),
            seal_type_id: seal_type_id.into(),
            unit_price,
        }
    }
}
