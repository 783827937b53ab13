use std::env;
use anyhow::{Context, Result, anyhow};

use crate::store::StoreBackend;

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_db: u32,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = var("STORE_BACKEND")
            .unwrap_or_else(|| "redis".to_string())
            .parse::<StoreBackend>()
            .map_err(|e| anyhow!(e))
            .context("STORE_BACKEND must be 'redis' or 'memory'")?;

        let redis_host = var("REDIS_HOST").unwrap_or_else(|| "redis".to_string());

        let redis_port = var("REDIS_PORT")
            .unwrap_or_else(|| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let redis_db = var("REDIS_DB")
            .unwrap_or_else(|| "0".to_string())
            .parse::<u32>()
            .context("REDIS_DB must be a non-negative database index")?;

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            redis_host,
            redis_port,
            redis_db,
            service_port,
            service_host,
        })
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.redis_host, self.redis_port, self.redis_db)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {}", self.store_backend.as_str());
        if self.store_backend == StoreBackend::Redis {
            tracing::info!("  Redis: {}", self.redis_url());
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
