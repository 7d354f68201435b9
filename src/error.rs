use thiserror::Error;

/// 存储层错误
/// 来自底层客户端的失败原样向上传递，不重试、不降级
#[derive(Debug, Error)]
pub enum StoreError {
    /// Redis 操作失败
    #[error("redis error: {0}")]
    Volatile(#[from] redis::RedisError),
    /// 数据库操作失败
    #[error("database error: {0}")]
    Durable(#[from] sqlx::Error),
    /// 数据库迁移失败
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    /// 更新时没有匹配的状态记录
    #[error("no state record matched the given user")]
    NotFound,
}

/// 应用错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 完整性错误：状态记录存在但缺少 scene 字段
    #[error("can't find State.scene for user; TG ID = {tg_id}")]
    MissingScene { tg_id: String },
    /// 完整性错误：状态记录存在但 registered 不是合法布尔值
    #[error("can't find State.registered for user; TG ID = {tg_id}")]
    MissingRegistered { tg_id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
