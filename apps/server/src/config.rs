//! Server configuration from environment variables.

use std::time::Duration;

use verdant_plant_data::PlantApiConfig;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE_PATH: &str = "verdant.db";
const DEFAULT_PLANT_API_URL: &str = "https://perenual.com/api/v2";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_path: String,
    pub plant_api_url: String,
    pub plant_api_key: String,
    /// Zero disables the background sync loop.
    pub sync_interval: Duration,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let plant_api_key = env_trimmed("PLANT_API_KEY").ok_or_else(|| {
            anyhow::anyhow!("PLANT_API_KEY is not set; a species API key is required")
        })?;

        let sync_interval_secs = match env_trimmed("SYNC_INTERVAL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("SYNC_INTERVAL_SECS must be an integer: {raw:?}"))?,
            None => 0,
        };

        Ok(Self {
            bind_addr: env_trimmed("VERDANT_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_path: env_trimmed("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            plant_api_url: env_trimmed("PLANT_API_URL")
                .unwrap_or_else(|| DEFAULT_PLANT_API_URL.to_string()),
            plant_api_key,
            sync_interval: Duration::from_secs(sync_interval_secs),
        })
    }

    pub fn plant_api(&self) -> PlantApiConfig {
        PlantApiConfig::new(&self.plant_api_url, &self.plant_api_key)
    }
}

fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
