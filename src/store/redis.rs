use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::error::StoreError;
use crate::store::VolatileStore;

/// Redis 实现的易失性存储
#[derive(Clone)]
pub struct RedisStore {
    client: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VolatileStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(key).await?;

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.set(key, value).await?;

        Ok(())
    }

    async fn expire(&self, key: &str, seconds: u64) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.expire(key, seconds as i64).await?;

        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.del(key).await?;

        Ok(())
    }
}
