use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod store;

use cache::UserStateCache;
use config::Config;
use database::StateRepository;
use error::{AppError, StoreError};
use store::redis::RedisStore;

/// 机器人共享客户端
/// 持有全局 Redis 客户端与数据库连接池，按需注入各组件
#[derive(Clone)]
pub struct BotClients {
    pub pool: PgPool,
    pub redis: Arc<RedisClient>,
    pub config: Config,
}

impl BotClients {
    /// 根据配置建立数据库连接池与 Redis 客户端
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_db_connections)
            .connect(&config.database_url)
            .await
            .map_err(StoreError::Durable)?;

        // 启动时应用数据库迁移
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(StoreError::Migrate)?;

        let redis_client =
            RedisClient::open(config.redis_url.clone()).map_err(StoreError::Volatile)?;

        tracing::info!("Connected to Postgres and Redis");

        Ok(BotClients {
            pool,
            redis: Arc::new(redis_client),
            config,
        })
    }

    /// 构造用户状态缓存组件
    pub fn user_state_cache(&self) -> UserStateCache<RedisStore, StateRepository> {
        UserStateCache::new(
            RedisStore::new(self.redis.clone()),
            StateRepository::new(self.pool.clone()),
        )
    }
}
