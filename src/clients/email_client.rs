/// 邮件投递 API 客户端
///
/// 封装所有与邮件投递服务相关的调用逻辑
use crate::clients::EmailDelivery;
use crate::config::Config;
use crate::error::AppError;
use crate::models::record::EmailPayload;
use anyhow::Result;
use serde_json::json;
use tracing::debug;

/// 邮件投递客户端
pub struct EmailClient {
    http: reqwest::Client,
    api_url: String,
    service_id: String,
    template_id: String,
    user_id: String,
}

impl EmailClient {
    /// 创建新的邮件投递客户端
    pub fn new(config: &Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// 使用已有的 HTTP 客户端创建（reqwest::Client 内部是 Arc，clone 开销很小）
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            api_url: config.email_api_url.clone(),
            service_id: config.email_service_id.clone(),
            template_id: config.email_template_id.clone(),
            user_id: config.email_user_id.clone(),
        }
    }

    /// 检查投递状态码是否表示成功
    pub fn is_success_status(status: u16) -> bool {
        status == 200
    }
}

impl EmailDelivery for EmailClient {
    /// 发送外发载荷
    ///
    /// # 参数
    /// - `payload`: 外发邮件载荷（字段已替换为上传后的 URL）
    ///
    /// # 返回
    /// 返回投递服务的 HTTP 状态码；传输层失败才返回错误，
    /// 非 200 状态码由调用方判定
    async fn send(&self, payload: &EmailPayload) -> Result<u16> {
        debug!("正在发送邮件 (service: {})", self.service_id);

        let body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.user_id,
            "template_params": payload,
        });

        let response = self
            .http
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(self.api_url.as_str(), e))?;

        let status = response.status().as_u16();
        debug!("邮件投递返回状态: {}", status);

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert!(EmailClient::is_success_status(200));
        assert!(!EmailClient::is_success_status(202));
        assert!(!EmailClient::is_success_status(400));
        assert!(!EmailClient::is_success_status(500));
    }
}
