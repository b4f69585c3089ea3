use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Only the generator reads this section
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// CSV written by the generator and read by the dashboard
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub record_count: usize,
    /// Fixed seed for reproducible datasets; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 5000,
            seed: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "data/raw_sales_data.csv"

[server]
host = "0.0.0.0"
port = 3000

[generator]
record_count = 5000
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
                return load_config_from(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.generator.record_count == 0 {
        anyhow::bail!("generator.record_count must be a positive integer");
    }
    Ok(config)
}

/// Dataset path; relative paths are resolved against the working directory
pub fn get_dataset_path(config: &Config) -> PathBuf {
    PathBuf::from(&config.dataset.path)
}

pub fn get_server_addr(config: &Config) -> anyhow::Result<SocketAddr> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", raw, e))
}
