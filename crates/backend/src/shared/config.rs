use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub records_path: String,
}

/// Defaults for dashboard requests that omit them
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
    /// Sales threshold used when a chart request has none
    #[serde(default)]
    pub threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            histogram_bins: default_histogram_bins(),
            top_limit: default_top_limit(),
            threshold: 0.0,
        }
    }
}

fn default_histogram_bins() -> usize {
    5
}

fn default_top_limit() -> usize {
    5
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
records_path = "data/sales.json"

[dashboard]
histogram_bins = 5
top_limit = 5
threshold = 0.0
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
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

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the records file path from configuration
///
/// Relative paths are tried next to the executable first, then against
/// the current directory
pub fn get_records_path(config: &Config) -> PathBuf {
    let records_path = Path::new(&config.data.records_path);

    if records_path.is_absolute() {
        return records_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(records_path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(&config.data.records_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.data.records_path, "data/sales.json");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.histogram_bins, 5);
    }

    #[test]
    fn test_dashboard_section_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [data]
            records_path = "/srv/sales.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.top_limit, 5);
        assert_eq!(config.dashboard.threshold, 0.0);
        assert_eq!(get_records_path(&config), PathBuf::from("/srv/sales.json"));
    }
}
