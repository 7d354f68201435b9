use async_trait::async_trait;
use sqlx::PgPool;

use crate::cache::models::user::UserStatePatch;
use crate::database::entities::state::StateEntity;
use crate::error::StoreError;
use crate::store::DurableStore;

/// 用户状态存储库实现
#[derive(Clone)]
pub struct StateRepository {
    pool: PgPool,
}

impl StateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DurableStore for StateRepository {
    /// 根据 TG ID 查找状态记录
    async fn find_state(&self, tg_id: &str) -> Result<Option<StateEntity>, StoreError> {
        let state = sqlx::query_as::<_, StateEntity>(
            r#"
            SELECT user_tg_id, scene, registered, created_at
            FROM user_states
            WHERE user_tg_id = $1
            "#,
        )
        .bind(tg_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(state)
    }

    /// 合并部分字段到已有记录，未给出的字段保持不变
    async fn update_state(&self, tg_id: &str, patch: &UserStatePatch) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE user_states
            SET scene = COALESCE($2, scene),
                registered = COALESCE($3, registered)
            WHERE user_tg_id = $1
            "#,
        )
        .bind(tg_id)
        .bind(patch.scene.as_deref())
        .bind(patch.registered)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("No state record matched for update: {}", tg_id);
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
