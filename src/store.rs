use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

use crate::config::Config;

/// Asynchronous string-to-string store holding phone -> address records
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Verify the store is reachable
    async fn ping(&self) -> Result<()>;
}

/// Build the store selected by configuration
pub fn from_config(config: &Config) -> Result<Arc<dyn AddressStore>> {
    match config.store_backend {
        StoreBackend::Redis => Ok(Arc::new(RedisStore::new(&config.redis_url())?)),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Redis => "redis",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("expected 'redis' or 'memory', got '{}'", other)),
        }
    }
}

/// Redis-backed store
///
/// Nothing is dialed at construction; the first command opens a
/// `ConnectionManager`, a multiplexed connection shared by every later
/// call. While Redis is down each command fails with an error and the next
/// one tries to connect again. After a dropped connection the manager
/// reconnects in the background, but the command that hit the failure
/// still returns an error.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    conn: Arc<OnceCell<ConnectionManager>>,
}

impl RedisStore {
    /// Create a store for the given `redis://host:port/db` URL
    ///
    /// Only the URL is checked here, the server may not be up yet.
    pub fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).context("Invalid Redis URL")?;
        tracing::info!("Redis store configured for: {}", url);

        Ok(Self {
            client,
            conn: Arc::new(OnceCell::new()),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new().set_number_of_retries(1);
                let conn = ConnectionManager::new_with_config(self.client.clone(), config)
                    .await
                    .context("Failed to connect to Redis")?;
                tracing::info!("Successfully connected to Redis");
                Ok::<_, anyhow::Error>(conn)
            })
            .await?;

        Ok(conn.clone())
    }
}

#[async_trait]
impl AddressStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .context("Failed to read from Redis")?;

        tracing::debug!("GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: () = conn
            .set(key, value)
            .await
            .context("Failed to write to Redis")?;

        tracing::debug!("SET {}", key);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to ping Redis")?;

        if reply == "PONG" {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Unexpected PING reply: {}", reply))
        }
    }
}

/// In-process store for local development and tests
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_from_str() {
        assert_eq!("redis".parse::<StoreBackend>(), Ok(StoreBackend::Redis));
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("Redis".parse::<StoreBackend>().is_err());
        assert!("".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_stores_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisStore>();
        assert_send_sync::<MemoryStore>();
    }

    #[tokio::test]
    async fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("+79991234567").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_set_overwrites() {
        let store = MemoryStore::new();
        store.set("+79991234567", "first").await.unwrap();
        store.set("+79991234567", "second").await.unwrap();

        assert_eq!(
            store.get("+79991234567").await.unwrap(),
            Some("second".to_string())
        );
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone.set("89991234567", "Kazan").await.unwrap();

        assert_eq!(
            store.get("89991234567").await.unwrap(),
            Some("Kazan".to_string())
        );
    }

    #[test]
    fn test_redis_store_rejects_bad_url() {
        assert!(RedisStore::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_redis_store_starts_without_server() {
        // Nothing listens on port 1
        let config = Config::from_vars(|key| match key {
            "REDIS_HOST" => Some("127.0.0.1".to_string()),
            "REDIS_PORT" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();

        let store = from_config(&config).expect("store builds without Redis");

        assert!(store.get("+79991234567").await.is_err());
        assert!(store.set("+79991234567", "Moscow").await.is_err());
        assert!(store.ping().await.is_err());
    }

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/0".to_string())
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_redis_set_and_get() {
        let store = RedisStore::new(&redis_url()).expect("Invalid Redis URL");

        store.ping().await.unwrap();

        let key = "+70000000001";
        store.set(key, "Moscow, Red Sq 1").await.unwrap();
        assert_eq!(
            store.get(key).await.unwrap(),
            Some("Moscow, Red Sq 1".to_string())
        );

        store.set(key, "Moscow, Red Sq 2").await.unwrap();
        assert_eq!(
            store.get(key).await.unwrap(),
            Some("Moscow, Red Sq 2".to_string())
        );
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_redis_get_missing() {
        let store = RedisStore::new(&redis_url()).expect("Invalid Redis URL");

        assert_eq!(store.get("+7missing-key-for-test").await.unwrap(), None);
    }
}
