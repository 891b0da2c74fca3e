use axum::{extract::Query, Json};
use contracts::domain::a102_shower_model::aggregate::ShowerModel;
use contracts::domain::common::EntityId;
use contracts::shared::catalog::QuoteSnapshot;
use serde::Deserialize;

use crate::shared::snapshot_store;

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    pub shower_type_id: Option<String>,
}

/// GET /api/quote/catalog
pub async fn get_snapshot() -> Json<QuoteSnapshot> {
    Json(snapshot_store::get_snapshot().clone())
}

/// GET /api/quote/models?shower_type_id=…
pub async fn list_models(Query(query): Query<ModelsQuery>) -> Json<Vec<ShowerModel>> {
    let catalog = &snapshot_store::get_snapshot().catalog;
    let models = match query.shower_type_id.map(EntityId::from).filter(|id| !id.is_empty()) {
        Some(shower_type_id) => catalog
            .models_for_shower_type(&shower_type_id)
            .into_iter()
            .cloned()
            .collect(),
        None => catalog.models.clone(),
    };
    Json(models)
}
