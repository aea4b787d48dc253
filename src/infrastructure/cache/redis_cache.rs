// src/infrastructure/cache/redis_cache.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::cache::{CacheRemoval, CacheStore},
};
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

/// Redis-backed cache. Pool and command failures surface as
/// `DependencyUnavailable` so callers can tell an outage from a miss.
#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0).
    /// Connections are opened lazily.
    pub fn from_url(url: &str) -> ApplicationResult<Self> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::unavailable(format!("redis pool: {err}")))
    }
}

fn command_error(err: &redis::RedisError) -> ApplicationError {
    ApplicationError::unavailable(format!("redis: {err}"))
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|err| command_error(&err))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1))
            .await
            .map_err(|err| command_error(&err))
    }

    async fn remove(&self, key: &str) -> ApplicationResult<CacheRemoval> {
        let mut conn = self.connection().await?;
        let deleted: i64 = conn.del(key).await.map_err(|err| command_error(&err))?;
        Ok(if deleted > 0 {
            CacheRemoval::Removed
        } else {
            CacheRemoval::AlreadyAbsent
        })
    }
}
