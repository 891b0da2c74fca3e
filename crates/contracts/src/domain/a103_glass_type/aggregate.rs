use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Тип стекла (справочник a103)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlassType {
    #[serde(default)]
    pub id: EntityId,

    /// Название; по нему же ищется строка прайса стекла
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,
}

impl GlassType {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

impl CatalogEntity for GlassType {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a103"
    }

    fn collection_name() -> &'static str {
        "glass_types"
    }

    fn element_name() -> &'static str {
        "Glass type"
    }
}
