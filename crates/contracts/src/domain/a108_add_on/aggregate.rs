use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Дополнительная опция (справочник a108)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
}

impl AddOn {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl CatalogEntity for AddOn {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a108"
    }

    fn collection_name() -> &'static str {
        "add_ons"
    }

    fn element_name() -> &'static str {
        "Add-on"
    }
}
