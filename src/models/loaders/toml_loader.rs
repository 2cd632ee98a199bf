use crate::models::record::SubmissionRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 SubmissionRecord 对象
pub async fn load_toml_to_record(toml_file_path: &Path) -> Result<SubmissionRecord> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let record: SubmissionRecord = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 记住来源文件路径，处理成功后用于清理
    Ok(record.with_file_path(toml_file_path.to_string_lossy().to_string()))
}

/// 从文件夹中加载所有 TOML 文件并转换为 SubmissionRecord 对象列表
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<SubmissionRecord>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut records = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_to_record(&path).await {
                Ok(record) => {
                    tracing::info!("成功加载申请记录: {}", record.applicant_name());
                    records.push(record);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(records)
}

/// 从文件夹中加载单个 TOML 文件（按索引）
pub async fn load_single_toml(folder_path: &str, index: usize) -> Result<Option<SubmissionRecord>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut toml_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }

    if toml_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 TOML 文件", folder_path);
        return Ok(None);
    }

    if index >= toml_files.len() {
        anyhow::bail!("索引 {} 超出范围，共有 {} 个文件", index, toml_files.len());
    }

    let toml_file = &toml_files[index];
    tracing::info!(
        "正在加载第 {} 个文件: {}",
        index + 1,
        toml_file.file_name().unwrap_or_default().to_string_lossy()
    );

    let record = load_toml_to_record(toml_file).await?;
    tracing::info!("成功加载申请记录: {}", record.applicant_name());

    Ok(Some(record))
}
