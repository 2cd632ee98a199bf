//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将无法提交的申请记录写入 warn.txt
/// - 只处理单条记录的警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `applicant`: 申请人姓名
    /// - `source`: 记录来源（文件路径或 "interactive"）
    /// - `reason`: 无法提交的原因
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write(&self, applicant: &str, source: &str, reason: &str) -> Result<()> {
        debug!(
            "写入警告: 申请人 {} | 来源 {} | 原因: {}",
            applicant, source, reason
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!(
            "{} | 申请人: {} | 来源: {} | 原因: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            applicant,
            source,
            reason
        );

        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
