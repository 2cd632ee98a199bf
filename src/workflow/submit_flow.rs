//! 申请提交流程 - 流程层
//!
//! 核心职责：定义"一条申请记录"的完整提交流程
//!
//! 流程顺序：
//! 1. 字段校验 → 不通过则直接拒绝（不发起任何网络调用）
//! 2. 顺序上传手持证件照、证件照（前一个完成后才开始后一个）
//! 3. 用上传得到的 URL 构建外发载荷 → 邮件投递 → 检查状态

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::{EmailClient, EmailDelivery, MediaClient, MediaUpload};
use crate::config::Config;
use crate::error::{AppError, BusinessError};
use crate::models::fields::ErrorRecord;
use crate::models::record::SubmissionRecord;
use crate::services::Validator;
use crate::utils::logging::mask_tail;
use crate::workflow::submit_ctx::SubmitCtx;

/// 申请提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 提交成功
    Accepted,
    /// 校验未通过（附各字段错误）
    Rejected(ErrorRecord),
}

/// 申请提交流程
///
/// - 编排完整的校验 → 上传 → 投递流程
/// - 不持有任何资源，只依赖业务能力（services）和外部协作方（clients）
/// - 两次上传严格顺序执行，任一失败整体中止
pub struct SubmitFlow<M = MediaClient, E = EmailClient> {
    validator: Validator,
    media_client: M,
    email_client: E,
    verbose_logging: bool,
}

impl SubmitFlow<MediaClient, EmailClient> {
    /// 创建新的申请提交流程
    pub fn new(config: &Config) -> Self {
        Self {
            validator: Validator::new(),
            media_client: MediaClient::new(config),
            email_client: EmailClient::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 使用已有的 HTTP 客户端创建（批量处理时共享连接池）
    pub fn with_http(config: &Config, http: reqwest::Client) -> Self {
        Self {
            validator: Validator::new(),
            media_client: MediaClient::with_http(config, http.clone()),
            email_client: EmailClient::with_http(config, http),
            verbose_logging: config.verbose_logging,
        }
    }
}

impl<M: MediaUpload, E: EmailDelivery> SubmitFlow<M, E> {
    /// 使用自定义协作方创建（测试用）
    pub fn with_clients(media_client: M, email_client: E, verbose_logging: bool) -> Self {
        Self {
            validator: Validator::new(),
            media_client,
            email_client,
            verbose_logging,
        }
    }

    /// 执行完整流程：校验 → 上传 → 投递
    pub async fn run(&self, record: &SubmissionRecord, ctx: &SubmitCtx) -> Result<SubmitOutcome> {
        if self.verbose_logging {
            self.log_record(ctx, record);
        }

        // ========== 流程 1: 字段校验 ==========
        let errors = self.validator.validate(record)?;

        if !errors.is_empty() {
            warn!(
                "[记录 {}] ⚠️ 校验未通过，{} 个字段不合法",
                ctx.record_index,
                errors.len()
            );
            if self.verbose_logging {
                for (field, message) in &errors {
                    warn!("[记录 {}]   {} → {}", ctx.record_index, field, message);
                }
            }
            return Ok(SubmitOutcome::Rejected(errors));
        }

        // 校验通过后才允许触网
        self.process(record, ctx).await?;
        Ok(SubmitOutcome::Accepted)
    }

    /// 校验通过后的提交动作：顺序上传两张图片，再投递邮件
    ///
    /// 交互式表单在自行校验之后直接调用这里
    pub async fn process(&self, record: &SubmissionRecord, ctx: &SubmitCtx) -> Result<()> {
        // ========== 流程 2: 顺序上传图片 ==========
        // 先手持证件照，后证件照；前一个失败则后一个不再开始
        let headshot_path = record.headshot_image.as_ref().ok_or(AppError::Business(
            BusinessError::MissingImage {
                field: "headshotImage",
            },
        ))?;

        info!("[记录 {}] 📤 正在上传手持证件照...", ctx.record_index);
        let headshot_url = self.media_client.upload_image(headshot_path).await?;
        info!("[记录 {}] ✓ 手持证件照上传完成", ctx.record_index);

        let upload_id_path = record.upload_id.as_ref().ok_or(AppError::Business(
            BusinessError::MissingImage { field: "uploadId" },
        ))?;

        info!("[记录 {}] 📤 正在上传证件照...", ctx.record_index);
        let upload_id_url = self.media_client.upload_image(upload_id_path).await?;
        info!("[记录 {}] ✓ 证件照上传完成", ctx.record_index);

        // ========== 流程 3: 构建载荷并投递 ==========
        let payload = record.to_email_payload(headshot_url, upload_id_url);

        info!("[记录 {}] 📤 正在投递邮件...", ctx.record_index);
        let status = self.email_client.send(&payload).await?;

        if EmailClient::is_success_status(status) {
            info!("[记录 {}] ✓ 邮件投递成功", ctx.record_index);
            Ok(())
        } else {
            warn!("[记录 {}] ⚠️ 邮件投递被拒绝: status={}", ctx.record_index, status);
            Err(AppError::delivery_rejected(status).into())
        }
    }

    // ========== 日志辅助方法 ==========

    /// 显示记录预览（敏感字段打码）
    fn log_record(&self, ctx: &SubmitCtx, record: &SubmissionRecord) {
        info!(
            "[记录 {}] 申请人: {} | 州: {} | SSN: {}",
            ctx.record_index,
            record.applicant_name(),
            record.state,
            mask_tail(&record.ssn, 4)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::Field;
    use crate::models::record::EmailPayload;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// 桩媒体客户端：记录调用顺序，可指定第几次调用失败
    struct StubMedia {
        calls: Arc<Mutex<Vec<String>>>,
        fail_on: Option<usize>,
    }

    impl MediaUpload for StubMedia {
        async fn upload_image(&self, file_path: &Path) -> Result<String> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(file_path.display().to_string());
            if self.fail_on == Some(index) {
                anyhow::bail!("网络错误");
            }
            Ok(format!("https://cdn.example.com/u{}.png", index + 1))
        }
    }

    /// 桩邮件客户端：记录发出的载荷，返回固定状态码
    struct StubEmail {
        status: u16,
        sent: Arc<Mutex<Vec<EmailPayload>>>,
    }

    impl EmailDelivery for StubEmail {
        async fn send(&self, payload: &EmailPayload) -> Result<u16> {
            self.sent.lock().unwrap().push(payload.clone());
            Ok(self.status)
        }
    }

    fn valid_record() -> SubmissionRecord {
        let mut record = SubmissionRecord::default();
        record.set_text(Field::FirstName, "John");
        record.set_text(Field::LastName, "Smith");
        record.set_text(Field::Ssn, "123456789");
        record.set_text(Field::Dob, "1990-05-17");
        record.set_text(Field::Phone, "5551234567");
        record.set_text(Field::Email, "john@example.com");
        record.set_text(Field::Address, "12 Main St");
        record.set_text(Field::City, "Austin");
        record.set_text(Field::State, "Texas");
        record.set_text(Field::ZipCode, "78701");
        record.set_image(Field::UploadId, "scans/id.png");
        record.set_image(Field::HeadshotImage, "scans/headshot.png");
        record
    }

    fn stub_flow(
        fail_on: Option<usize>,
        status: u16,
    ) -> (
        SubmitFlow<StubMedia, StubEmail>,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<EmailPayload>>>,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sent = Arc::new(Mutex::new(Vec::new()));
        let flow = SubmitFlow::with_clients(
            StubMedia {
                calls: calls.clone(),
                fail_on,
            },
            StubEmail {
                status,
                sent: sent.clone(),
            },
            false,
        );
        (flow, calls, sent)
    }

    #[tokio::test]
    async fn test_uploads_run_in_order_and_urls_land_in_payload() {
        let (flow, calls, sent) = stub_flow(None, 200);
        let record = valid_record();
        let ctx = SubmitCtx::new("John Smith".to_string(), 1, "test".to_string());

        let outcome = flow.run(&record, &ctx).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Accepted);

        // 上传顺序：先手持证件照，后证件照
        let calls = calls.lock().unwrap();
        assert_eq!(*calls, ["scans/headshot.png", "scans/id.png"]);

        // U1 进 headshotImage，U2 进 uploadId，其余字段原样
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].headshot_image, "https://cdn.example.com/u1.png");
        assert_eq!(sent[0].upload_id, "https://cdn.example.com/u2.png");
        assert_eq!(sent[0].first_name, "John");
        assert_eq!(sent[0].zip_code, "78701");
    }

    #[tokio::test]
    async fn test_first_upload_failure_aborts_before_second() {
        let (flow, calls, sent) = stub_flow(Some(0), 200);
        let record = valid_record();
        let ctx = SubmitCtx::new("John Smith".to_string(), 1, "test".to_string());

        let result = flow.run(&record, &ctx).await;
        assert!(result.is_err());

        // 第二次上传从未开始，邮件也从未发出
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_rejection_is_an_error() {
        let (flow, calls, sent) = stub_flow(None, 400);
        let record = valid_record();
        let ctx = SubmitCtx::new("John Smith".to_string(), 1, "test".to_string());

        let result = flow.run(&record, &ctx).await;
        assert!(result.is_err());

        // 两次上传和一次投递都发生了
        assert_eq!(calls.lock().unwrap().len(), 2);
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected_without_network() {
        let (flow, calls, sent) = stub_flow(None, 200);
        let mut record = valid_record();
        record.set_text(Field::Ssn, "12345678");
        record.set_text(Field::Email, "a@b");
        let ctx = SubmitCtx::new("John Smith".to_string(), 1, "test".to_string());

        let outcome = flow.run(&record, &ctx).await.unwrap();
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                let keys: Vec<Field> = errors.keys().copied().collect();
                assert_eq!(keys, vec![Field::Ssn, Field::Email]);
            }
            other => panic!("意外的结果: {:?}", other),
        }

        // 校验拒绝时没有任何网络调用
        assert!(calls.lock().unwrap().is_empty());
        assert!(sent.lock().unwrap().is_empty());
    }
}
