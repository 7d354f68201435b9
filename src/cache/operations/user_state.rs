use crate::cache::keys::user_keys;
use crate::cache::models::user::{CachedUserState, UserStatePatch};
use crate::error::AppError;
use crate::store::{DurableStore, VolatileStore};

/// 用户会话状态缓存
///
/// 旁路缓存协调器：读取时先查易失性存储，未命中再回源数据库、
/// 校验并回填；写入时先更新数据库，成功后删除对应缓存条目。
/// 组件自身无状态，所有状态都在两个外部存储里。
pub struct UserStateCache<V, D> {
    volatile: V,
    durable: D,
}

impl<V: VolatileStore, D: DurableStore> UserStateCache<V, D> {
    pub fn new(volatile: V, durable: D) -> Self {
        Self { volatile, durable }
    }

    /// 拉取用户当前状态
    ///
    /// 缓存命中直接使用缓存值；未命中时从数据库加载并回填。
    /// 无论命中还是回填，成功读取后都会把键的 TTL 重置为 45 秒。
    /// 否定结果不缓存，每次未命中都会重新查询数据库。
    pub async fn pull(&self, tg_id: &str) -> Result<Option<CachedUserState>, AppError> {
        let key = user_keys::user_state_key(tg_id);

        let json = match self.volatile.get(&key).await? {
            Some(json) => json,
            None => {
                tracing::debug!("State cache miss: {}", tg_id);

                // 数据库查询
                let Some(state) = self.durable.find_state(tg_id).await? else {
                    return Ok(None);
                };

                let scene = match state.scene {
                    Some(scene) if !scene.is_empty() => scene,
                    _ => {
                        return Err(AppError::MissingScene {
                            tg_id: tg_id.to_string(),
                        });
                    }
                };
                let Some(registered) = state.registered else {
                    return Err(AppError::MissingRegistered {
                        tg_id: tg_id.to_string(),
                    });
                };

                let json = serde_json::to_string(&CachedUserState { scene, registered })?;
                self.volatile.set(&key, &json).await?;
                json
            }
        };

        // 命中与回填两条路径都刷新 TTL，热点用户的条目保持存活
        self.volatile
            .expire(&key, user_keys::USER_STATE_TTL_SECS)
            .await?;

        let state = serde_json::from_str(&json)?;
        Ok(Some(state))
    }

    /// 推送用户状态变更
    ///
    /// 先更新数据库，成功后删除缓存条目（其数据已失去价值）。
    /// 数据库更新失败时不触碰缓存，删除失败则向上传递。
    pub async fn push(&self, tg_id: &str, patch: &UserStatePatch) -> Result<(), AppError> {
        self.durable.update_state(tg_id, patch).await?;

        let key = user_keys::user_state_key(tg_id);
        self.volatile.del(&key).await?;

        Ok(())
    }
}
