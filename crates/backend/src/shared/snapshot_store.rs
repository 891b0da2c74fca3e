use contracts::shared::catalog::QuoteSnapshot;
use contracts::usecases::u501_calculate_quote::CompanySettings;
use once_cell::sync::{Lazy, OnceCell};
use std::path::{Path, PathBuf};

static SNAPSHOT: OnceCell<QuoteSnapshot> = OnceCell::new();
static SETTINGS: OnceCell<CompanySettings> = OnceCell::new();

static EMPTY_SNAPSHOT: Lazy<QuoteSnapshot> = Lazy::new(QuoteSnapshot::default);
static DEFAULT_SETTINGS: Lazy<CompanySettings> = Lazy::new(CompanySettings::default);

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_snapshot(contents: &str) -> Result<QuoteSnapshot, serde_json::Error> {
    serde_json::from_str(contents)
}

pub fn read_snapshot(path: &Path) -> Result<QuoteSnapshot, SnapshotError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&contents).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Снимок для сервера: при ошибке чтения пустой, и все цены будут нулевыми
pub fn load_or_empty(path: &Path) -> QuoteSnapshot {
    match read_snapshot(path) {
        Ok(snapshot) => {
            tracing::info!(
                "Loaded quote snapshot from {}: {} shower types, {} glass prices, {} hardware prices, {} seal prices, {} add-on prices",
                path.display(),
                snapshot.catalog.shower_types.len(),
                snapshot.pricing.glass.len(),
                snapshot.pricing.hardware.len(),
                snapshot.pricing.seals.len(),
                snapshot.pricing.add_ons.len()
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!("{}; serving an empty catalog", e);
            QuoteSnapshot::default()
        }
    }
}

/// Загрузить снимок и настройки компании один раз при старте
pub fn initialize(path: &Path, settings: CompanySettings) {
    let snapshot = load_or_empty(path);
    if SNAPSHOT.set(snapshot).is_err() {
        tracing::warn!("Quote snapshot already initialized, ignoring {}", path.display());
    }
    tracing::info!(
        "Profit margin: {}%",
        settings.effective_profit_margin_percent()
    );
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("Company settings already initialized, ignoring new settings");
    }
}

pub fn get_snapshot() -> &'static QuoteSnapshot {
    SNAPSHOT.get().unwrap_or(&*EMPTY_SNAPSHOT)
}

pub fn get_settings() -> &'static CompanySettings {
    SETTINGS.get().unwrap_or(&*DEFAULT_SETTINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_snapshot_parses() {
        let snapshot = parse_snapshot(include_str!("../../data/quote_snapshot.example.json")).unwrap();
        assert!(!snapshot.is_empty());
        assert!(!snapshot.pricing.glass.is_empty());
    }

    #[test]
    fn test_lenient_rows() {
        let snapshot = parse_snapshot(
            r#"{
                "pricing": {
                    "glass": [{"id": 1, "glass_type": "Clear", "thickness_mm": "8", "price_per_m2": "n/a"}],
                    "seals": [{"id": "s1", "seal_type_id": 4, "unit_price": null}]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.pricing.glass[0].thickness_mm, 8.0);
        assert_eq!(snapshot.pricing.glass[0].price_per_m2, 0.0);
        assert_eq!(snapshot.pricing.seals[0].unit_price, 0.0);
    }

    #[test]
    fn test_null_name_does_not_empty_catalog() {
        let path = std::env::temp_dir().join(format!("null-name-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{
                "catalog": {"glass_types": [{"id": 1, "name": null}, {"id": 2, "name": "Clear"}]},
                "pricing": {"glass": [{"id": 1, "glass_type": "Clear", "thickness_mm": 8, "price_per_m2": 45}]}
            }"#,
        )
        .unwrap();
        let snapshot = load_or_empty(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(snapshot.catalog.glass_types.len(), 2);
        assert_eq!(snapshot.pricing.glass.len(), 1);
    }

    #[test]
    fn test_second_initialize_keeps_first_settings() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        initialize(&path, CompanySettings::with_profit_margin(35.0));
        initialize(&path, CompanySettings::with_profit_margin(50.0));
        assert_eq!(get_settings().effective_profit_margin_percent(), 35.0);
        assert!(get_snapshot().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("broken-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().contains("cannot parse snapshot"));
        std::fs::remove_file(&path).unwrap();
    }
}
