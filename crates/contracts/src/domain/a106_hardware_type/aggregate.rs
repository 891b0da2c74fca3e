use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Тип фурнитуры (справочник a106)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HardwareType {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
}

impl HardwareType {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl CatalogEntity for HardwareType {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a106"
    }

    fn collection_name() -> &'static str {
        "hardware_types"
    }

    fn element_name() -> &'static str {
        "Hardware type"
    }
}
