//! 单条记录处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责单条申请记录的完整生命周期，是记录级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **流程调度**：委托 `SubmitFlow` 执行校验 → 上传 → 投递
//! 2. **拒绝兜底**：校验未通过时逐字段写入 warn.txt，保留源文件等待修正
//! 3. **失败兜底**：上传或投递失败时写入 warn.txt，保留源文件可重试
//! 4. **文件清理**：提交成功后删除已处理的 TOML 文件
//! 5. **统计输出**：记录成功/失败结果

use crate::clients::{EmailDelivery, MediaUpload};
use crate::services::WarnWriter;
use crate::models::record::SubmissionRecord;
use crate::workflow::{SubmitCtx, SubmitFlow, SubmitOutcome};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// 处理单条申请记录
///
/// # 参数
/// - `flow`: 提交流程
/// - `warn_writer`: 警告写入服务
/// - `record`: 申请记录数据
/// - `record_index`: 记录索引（用于日志）
///
/// # 返回
/// 返回是否成功提交
pub async fn process_record<M: MediaUpload, E: EmailDelivery>(
    flow: &SubmitFlow<M, E>,
    warn_writer: &WarnWriter,
    record: SubmissionRecord,
    record_index: usize,
) -> Result<bool> {
    log_record_start(record_index, &record);

    let ctx = SubmitCtx::new(
        record.applicant_name(),
        record_index,
        record
            .source_path
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
    );

    // 执行流程（委托给 SubmitFlow）
    match flow.run(&record, &ctx).await {
        Ok(SubmitOutcome::Accepted) => {
            // 清理文件
            cleanup_file(record.source_path.as_deref(), record_index)?;
            info!("[记录 {}] ✅ 申请记录提交完成\n", record_index);
            Ok(true)
        }
        Ok(SubmitOutcome::Rejected(errors)) => {
            warn!(
                "[记录 {}] ⚠️ 校验未通过，已写入 warn.txt，源文件保留待修正",
                record_index
            );
            // 每个不合法字段写一行，修正后重新运行即可重试
            for (field, message) in &errors {
                warn_writer
                    .write(&ctx.applicant, &ctx.source, &format!("{}: {}", field, message))
                    .await?;
            }
            Ok(false)
        }
        Err(e) => {
            error!("[记录 {}] ❌ 提交失败: {}", record_index, e);
            warn_writer
                .write(&ctx.applicant, &ctx.source, &format!("提交失败: {}", e))
                .await?;
            Ok(false)
        }
    }
}

/// 清理已处理的文件
fn cleanup_file(file_path: Option<&str>, record_index: usize) -> Result<()> {
    info!("[记录 {}] 🗑️ 清理已处理的文件...", record_index);

    if let Some(file_path) = file_path {
        if Path::new(file_path).exists() {
            fs::remove_file(file_path).with_context(|| format!("无法删除文件: {}", file_path))?;
            info!(
                "[记录 {}] ✓ 文件已删除: {}",
                record_index,
                Path::new(file_path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
        } else {
            warn!("[记录 {}] ⚠️ 文件不存在: {}", record_index, file_path);
        }
    } else {
        warn!("[记录 {}] ⚠️ 文件路径未设置", record_index);
    }

    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_record_start(record_index: usize, record: &SubmissionRecord) {
    info!("\n[记录 {}] {}", record_index, "─".repeat(30));
    info!("[记录 {}] 开始处理", record_index);
    info!("[记录 {}] 申请人: {}", record_index, record.applicant_name());
}
