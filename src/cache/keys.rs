/// 历史天气缓存键前缀
const HISTORY_PREFIX: &str = "history:";

/// 生成历史天气缓存键，格式 `history:<location_id>:<days>`
pub fn history_key(location_id: i64, days: u32) -> String {
    format!("{}{}:{}", HISTORY_PREFIX, location_id, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_colon_delimited_literal_format() {
        assert_eq!(history_key(1, 7), "history:1:7");
        assert_eq!(history_key(42, 0), "history:42:0");
    }

    #[test]
    fn key_is_deterministic() {
        assert_eq!(history_key(3, 5), history_key(3, 5));
    }

    #[test]
    fn keys_differ_when_either_component_differs() {
        assert_ne!(history_key(1, 7), history_key(1, 3));
        assert_ne!(history_key(1, 7), history_key(2, 7));
        // 11:1 与 1:11 不能撞键
        assert_ne!(history_key(11, 1), history_key(1, 11));
    }
}
