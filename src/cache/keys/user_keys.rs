/// 用户状态缓存键前缀
const USER_STATE_PREFIX: &str = "user:";

/// 用户状态缓存 TTL（秒），每次成功读取后重置
pub const USER_STATE_TTL_SECS: u64 = 45;

/// 生成用户状态缓存键
pub fn user_state_key(tg_id: &str) -> String {
    format!("{}{}", USER_STATE_PREFIX, tg_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_state_key_uses_fixed_prefix() {
        assert_eq!(user_state_key("42"), "user:42");
        assert_eq!(user_state_key(""), "user:");
    }
}
