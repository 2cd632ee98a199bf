//! 日志工具模块
//!
//! 提供日志初始化和格式化的辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化日志订阅器
///
/// 默认 info 级别，可用 RUST_LOG 环境变量覆盖
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// 敏感字段打码，只保留末尾几位
///
/// # 参数
/// - `text`: 原始文本
/// - `keep`: 保留末尾的字符数
///
/// # 返回
/// 返回打码后的文本，如 "*****6789"
pub fn mask_tail(text: &str, keep: usize) -> String {
    let total = text.chars().count();
    if total <= keep {
        return "*".repeat(total);
    }
    let masked = "*".repeat(total - keep);
    let tail: String = text.chars().skip(total - keep).collect();
    masked + &tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_mask_tail() {
        assert_eq!(mask_tail("123456789", 4), "*****6789");
        assert_eq!(mask_tail("123", 4), "***");
        assert_eq!(mask_tail("", 4), "");
    }
}
