pub mod config;
pub mod snapshot_store;
