use chrono::{DateTime, Utc};

/// 用户会话状态数据库实体
/// scene 和 registered 为可空列，缺失即视为完整性问题
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StateEntity {
    pub user_tg_id: String,
    pub scene: Option<String>,
    pub registered: Option<bool>,
    pub created_at: DateTime<Utc>,
}
