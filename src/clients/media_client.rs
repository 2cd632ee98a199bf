/// 媒体托管 API 客户端
///
/// 封装所有与媒体托管服务相关的上传逻辑
use crate::clients::MediaUpload;
use crate::config::Config;
use crate::error::AppError;
use anyhow::Result;
use reqwest::multipart;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// 媒体托管客户端
pub struct MediaClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl MediaClient {
    /// 创建新的媒体托管客户端
    pub fn new(config: &Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// 使用已有的 HTTP 客户端创建（reqwest::Client 内部是 Arc，clone 开销很小）
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            upload_url: config.upload_api_url.clone(),
            upload_preset: config.upload_preset.clone(),
        }
    }

    /// 检查上传响应是否成功
    pub fn is_success_response(result: &Value) -> bool {
        Self::extract_secure_url(result).is_some()
    }

    /// 提取托管 URL
    pub fn extract_secure_url(result: &Value) -> Option<&str> {
        result.get("secure_url").and_then(|v| v.as_str())
    }
}

impl MediaUpload for MediaClient {
    /// 上传图片文件
    ///
    /// # 参数
    /// - `file_path`: 本地图片文件路径
    ///
    /// # 返回
    /// 返回托管 URL；传输失败、非 2xx 状态或响应缺少 URL 都视为失败
    async fn upload_image(&self, file_path: &Path) -> Result<String> {
        debug!("正在上传图片: {}", file_path.display());

        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|e| AppError::file_read_failed(file_path.to_string_lossy(), e))?;

        let file_name = file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name))
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(self.upload_url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_bad_response(self.upload_url.as_str(), status.as_u16()).into());
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(self.upload_url.as_str(), e))?;

        match Self::extract_secure_url(&data) {
            Some(url) => {
                debug!("图片上传成功: {}", url);
                Ok(url.to_string())
            }
            None => Err(AppError::api_missing_field(self.upload_url.as_str(), "secure_url").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_secure_url() {
        let ok = json!({ "secure_url": "https://cdn.example.com/a.png", "bytes": 1024 });
        assert_eq!(
            MediaClient::extract_secure_url(&ok),
            Some("https://cdn.example.com/a.png")
        );
        assert!(MediaClient::is_success_response(&ok));

        let bad = json!({ "error": { "message": "Upload preset not found" } });
        assert_eq!(MediaClient::extract_secure_url(&bad), None);
        assert!(!MediaClient::is_success_response(&bad));
    }
}
