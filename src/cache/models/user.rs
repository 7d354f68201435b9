use serde::{Deserialize, Serialize};

/// 用户会话状态缓存数据模型
/// 两个字段都必须存在且类型正确，否则不允许进入缓存
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CachedUserState {
    pub scene: String,
    pub registered: bool,
}

/// 用户状态部分更新
/// 未给出的字段在数据库中保持不变
#[derive(Debug, Clone, Default)]
pub struct UserStatePatch {
    pub scene: Option<String>,
    pub registered: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_state_round_trips_as_compact_json() {
        let state = CachedUserState {
            scene: "start".to_string(),
            registered: true,
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"scene":"start","registered":true}"#);

        let parsed: CachedUserState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn cached_state_rejects_missing_fields() {
        // registered 缺失的 JSON 不能反序列化为合法状态
        let result = serde_json::from_str::<CachedUserState>(r#"{"scene":"start"}"#);
        assert!(result.is_err());
    }
}
