use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Покрытие фурнитуры (справочник a105), по названию ищется цена фурнитуры
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HardwareFinish {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
}

impl HardwareFinish {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl CatalogEntity for HardwareFinish {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a105"
    }

    fn collection_name() -> &'static str {
        "finishes"
    }

    fn element_name() -> &'static str {
        "Finish"
    }
}
