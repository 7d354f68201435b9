// 外部存储接口
// 缓存核心只依赖这两个 trait，具体客户端在装配时注入

pub mod redis;

use async_trait::async_trait;

use crate::cache::models::user::UserStatePatch;
use crate::database::entities::state::StateEntity;
use crate::error::StoreError;

/// 易失性键值存储接口（字符串值，显式 TTL）
#[async_trait]
pub trait VolatileStore: Send + Sync {
    /// 读取键值，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入键值，不设置 TTL
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// 设置/刷新键的 TTL（秒）
    async fn expire(&self, key: &str, seconds: u64) -> Result<(), StoreError>;

    /// 删除键，键不存在时为空操作
    async fn del(&self, key: &str) -> Result<(), StoreError>;
}

/// 持久化状态存储接口（按用户标识的单记录读写）
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// 查找用户的状态记录
    async fn find_state(&self, tg_id: &str) -> Result<Option<StateEntity>, StoreError>;

    /// 合并给定字段到已有记录，没有匹配记录时失败
    async fn update_state(&self, tg_id: &str, patch: &UserStatePatch) -> Result<(), StoreError>;
}
