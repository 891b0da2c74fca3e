use crate::domain::common::EntityId;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Строка прайса дополнительных опций (проекция p904), ключ: точное название
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddOnPriceDto {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
}

impl AddOnPriceDto {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: EntityId::default(),
            name: name.into(),
            price,
        }
    }
}
