//! 提交处理上下文
//!
//! 封装"我正在处理哪一条申请记录"这一信息

use std::fmt::Display;

/// 提交处理上下文
///
/// 包含处理单条申请记录所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct SubmitCtx {
    /// 申请人姓名
    pub applicant: String,

    /// 记录索引（仅用于日志显示）
    pub record_index: usize,

    /// 记录来源（TOML 文件路径，交互模式下为 "interactive"）
    pub source: String,
}

impl SubmitCtx {
    /// 创建新的提交上下文
    pub fn new(applicant: String, record_index: usize, source: String) -> Self {
        Self {
            applicant,
            record_index,
            source,
        }
    }

    /// 创建交互模式下的提交上下文
    pub fn interactive(applicant: String) -> Self {
        Self {
            applicant,
            record_index: 0,
            source: "interactive".to_string(),
        }
    }
}

impl Display for SubmitCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[记录 #{} 申请人#{} 来源#{}]",
            self.record_index, self.applicant, self.source
        )
    }
}
