use contracts::usecases::u501_calculate_quote::CompanySettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub company: CompanySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON со справочниками и прайсами
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_snapshot_path() -> String {
    "data/quote_snapshot.json".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
snapshot_path = "data/quote_snapshot.json"

[company]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the snapshot file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_snapshot_path(config: &Config) -> PathBuf {
    let snapshot_path = Path::new(&config.catalog.snapshot_path);

    if snapshot_path.is_absolute() {
        return snapshot_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(snapshot_path);
        }
    }

    PathBuf::from(&config.catalog.snapshot_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.snapshot_path, "data/quote_snapshot.json");
        assert_eq!(config.company.profit_margin_percent, None);
        assert_eq!(config.company.effective_profit_margin_percent(), 20.0);
    }

    #[test]
    fn test_company_section() {
        let config = parse_config(
            r#"
            [company]
            company_name = "Glass Works"
            profit_margin_percent = 35
            "#,
        )
        .unwrap();
        assert_eq!(config.company.effective_profit_margin_percent(), 35.0);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_absolute_snapshot_path_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("snapshot.json");
        config.catalog.snapshot_path = absolute.to_string_lossy().to_string();
        assert_eq!(get_snapshot_path(&config), absolute);
    }
}
