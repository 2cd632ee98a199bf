//! 批量记录处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量申请记录的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、创建共享的 HTTP 客户端
//! 2. **批量加载**：扫描并加载所有待处理的记录（`Vec<SubmissionRecord>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将记录分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有记录的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单条记录的细节
//! - **并发安全**：通过 Semaphore 和 tokio::spawn 实现并发；
//!   单条记录内部的两次上传和一次投递仍然严格顺序执行
//! - **向下委托**：委托 record_processor 处理单条记录

use crate::config::Config;
use crate::models::{load_all_toml_files, SubmissionRecord};
use crate::orchestrator::record_processor;
use crate::services::WarnWriter;
use crate::workflow::SubmitFlow;
use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    http: reqwest::Client,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 共享的 HTTP 客户端（内部是 Arc，clone 开销很小）
        let http = reqwest::Client::new();

        Ok(Self { config, http })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的记录
        let all_records = self.load_records().await?;

        if all_records.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(());
        }

        let total_records = all_records.len();
        log_records_loaded(total_records, self.config.max_concurrent_records);

        // 处理所有记录
        let stats = self.process_all_records(all_records).await?;

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 加载记录
    async fn load_records(&self) -> Result<Vec<SubmissionRecord>> {
        info!("\n📁 正在扫描待处理的申请记录...");
        load_all_toml_files(&self.config.records_folder).await
    }

    /// 处理所有记录
    async fn process_all_records(
        &self,
        all_records: Vec<SubmissionRecord>,
    ) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_records));
        let total_records = all_records.len();
        let mut stats = ProcessingStats {
            total: total_records,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total_records).step_by(self.config.max_concurrent_records) {
            let batch_end = (batch_start + self.config.max_concurrent_records).min(total_records);
            let batch_records = &all_records[batch_start..batch_end];
            let batch_num = (batch_start / self.config.max_concurrent_records) + 1;
            let total_batches = (total_records + self.config.max_concurrent_records - 1)
                / self.config.max_concurrent_records;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_records,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_records, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            log_batch_complete(batch_num, &batch_result);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_records: &[SubmissionRecord],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, record) in batch_records.iter().enumerate() {
            let record_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let record_clone = record.clone();
            let config_clone = self.config.clone();
            let http_clone = self.http.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let flow = SubmitFlow::with_http(&config_clone, http_clone);
                let warn_writer = WarnWriter::with_path(config_clone.warn_file.clone());

                match record_processor::process_record(
                    &flow,
                    &warn_writer,
                    record_clone,
                    record_index,
                )
                .await
                {
                    Ok(true) => Ok(true),
                    Ok(false) => Ok(false),
                    Err(e) => {
                        error!("[记录 {}] ❌ 处理过程中发生错误: {}", record_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((record_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (record_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(true)) => {
                    result.success += 1;
                }
                Ok(Ok(false)) | Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[记录 {}] 任务执行失败: {}", record_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n申请记录提交日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 申请记录批量提交模式");
    info!("📊 最大并发数: {}", config.max_concurrent_records);
    info!("{}", "=".repeat(60));
}

fn log_records_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 条待提交的申请记录", total);
    info!("📋 将以每批 {} 条的方式处理", max_concurrent);
    info!("💡 每批完成后再开始下一批\n");
}

fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批记录: {}-{} / 共 {} 条", start, end, total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(batch_num: usize, result: &BatchResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 第 {} 批完成: 成功 {}/{}",
        batch_num,
        result.success,
        result.success + result.failed
    );
    info!("{}", "─".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
