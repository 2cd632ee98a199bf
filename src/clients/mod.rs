//! 外部协作方客户端
//!
//! 两个外部依赖的窄接口：
//! - `MediaUpload`：把一个本地图片文件变成托管 URL
//! - `EmailDelivery`：把外发载荷作为邮件发出，返回 HTTP 状态码
//!
//! 流程层只依赖这两个 trait，真实实现走 reqwest，
//! 测试时可以换成桩实现而不触网。

pub mod email_client;
pub mod media_client;

pub use email_client::EmailClient;
pub use media_client::MediaClient;

use anyhow::Result;
use std::path::Path;

use crate::models::record::EmailPayload;

/// 媒体上传能力
#[allow(async_fn_in_trait)]
pub trait MediaUpload {
    /// 上传一个图片文件，返回托管 URL
    async fn upload_image(&self, file_path: &Path) -> Result<String>;
}

/// 邮件投递能力
#[allow(async_fn_in_trait)]
pub trait EmailDelivery {
    /// 发送外发载荷，返回投递服务的 HTTP 状态码（200 表示成功）
    async fn send(&self, payload: &EmailPayload) -> Result<u16>;
}
