use crate::domain::common::{CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Толщина стекла (справочник a104)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlassThickness {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// Толщина в миллиметрах
    #[serde(
        default,
        alias = "value",
        alias = "mm",
        deserialize_with = "lenient::number"
    )]
    pub thickness_mm: f64,
}

impl GlassThickness {
    pub fn new(id: impl Into<EntityId>, thickness_mm: f64) -> Self {
        Self {
            id: id.into(),
            name: format!("{} mm", thickness_mm),
            thickness_mm,
        }
    }
}

impl CatalogEntity for GlassThickness {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a104"
    }

    fn collection_name() -> &'static str {
        "glass_thicknesses"
    }

    fn element_name() -> &'static str {
        "Glass thickness"
    }
}
