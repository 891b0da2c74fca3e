use crate::domain::common::{optional_id, CatalogEntity, EntityId};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Модель кабины (справочник a102), принадлежит одному типу кабины
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShowerModel {
    #[serde(default)]
    pub id: EntityId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// Ссылка на тип кабины (a101)
    #[serde(default, deserialize_with = "optional_id")]
    pub shower_type_id: Option<EntityId>,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image_url: Option<String>,
}

impl ShowerModel {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        shower_type_id: impl Into<EntityId>,
    ) -> Self {
        let shower_type_id: EntityId = shower_type_id.into();
        Self {
            id: id.into(),
            name: name.into(),
            shower_type_id: shower_type_id.non_empty().cloned(),
            ..Default::default()
        }
    }

    pub fn belongs_to(&self, shower_type_id: &EntityId) -> bool {
        self.shower_type_id.as_ref() == Some(shower_type_id)
    }
}

impl CatalogEntity for ShowerModel {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog_index() -> &'static str {
        "a102"
    }

    fn collection_name() -> &'static str {
        "models"
    }

    fn element_name() -> &'static str {
        "Model"
    }
}
