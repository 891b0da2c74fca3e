//! Common types and traits for all catalog entities

pub mod catalog_entity;
pub mod entity_id;

// Re-exports
pub use catalog_entity::{find_by_id, resolve_name, CatalogEntity};
pub use entity_id::{optional_id, EntityId};
