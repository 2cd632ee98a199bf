//! 表单状态持有者
//!
//! 交互式单条记录的提交界面：持有申请记录、逐字段错误和三个状态位
//! （提交中、成功消息、失败消息），并实现提交状态机：
//!
//! Idle → 校验 → (不通过 → Idle，显示逐字段错误)
//!              | (上传 → 投递 → 成功 → Idle，重置记录)
//!              | (失败 → Idle，显示通用失败消息，保留已填内容)

use tracing::{error, warn};

use crate::clients::{EmailClient, EmailDelivery, MediaClient, MediaUpload};
use crate::config::Config;
use crate::models::fields::{ErrorRecord, Field};
use crate::models::record::SubmissionRecord;
use crate::services::Validator;
use crate::workflow::submit_ctx::SubmitCtx;
use crate::workflow::submit_flow::SubmitFlow;

/// 提交成功时显示的消息
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
/// 上传或投递失败时显示的通用消息
pub const FAILURE_MESSAGE: &str = "Form submission failed. Please try again.";

/// 表单状态持有者
pub struct FormState<M = MediaClient, E = EmailClient> {
    record: SubmissionRecord,
    errors: ErrorRecord,
    submitting: bool,
    success_message: Option<String>,
    error_message: Option<String>,
    validator: Validator,
    flow: SubmitFlow<M, E>,
}

impl FormState<MediaClient, EmailClient> {
    /// 创建新的表单状态（记录为空）
    pub fn new(config: &Config) -> Self {
        Self::with_flow(SubmitFlow::new(config))
    }
}

impl<M: MediaUpload, E: EmailDelivery> FormState<M, E> {
    /// 使用自定义流程创建（测试用）
    pub fn with_flow(flow: SubmitFlow<M, E>) -> Self {
        Self {
            record: SubmissionRecord::default(),
            errors: ErrorRecord::new(),
            submitting: false,
            success_message: None,
            error_message: None,
            validator: Validator::new(),
            flow,
        }
    }

    // ========== 字段录入 ==========

    /// 设置文本字段的值
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.record.set_text(field, value);
    }

    /// 设置文件字段的引用
    pub fn set_image(&mut self, field: Field, path: impl Into<std::path::PathBuf>) {
        self.record.set_image(field, path);
    }

    // ========== 状态读取 ==========

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorRecord {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // ========== 提交状态机 ==========

    /// 触发一次提交
    ///
    /// 任何失败都折叠进通用失败消息；本方法返回后表单总是回到可交互状态。
    /// 上一次提交未结束时重复触发会被忽略。
    pub async fn submit(&mut self) {
        if self.submitting {
            warn!("提交进行中，忽略重复触发");
            return;
        }

        // ========== 校验（不通过则不触网） ==========
        let errors = match self.validator.validate(&self.record) {
            Ok(errors) => errors,
            Err(e) => {
                error!("校验执行失败: {}", e);
                self.error_message = Some(FAILURE_MESSAGE.to_string());
                return;
            }
        };

        if !errors.is_empty() {
            self.errors = errors;
            return;
        }

        self.errors.clear();
        self.submitting = true;

        // ========== 上传并投递 ==========
        let ctx = SubmitCtx::interactive(self.record.applicant_name());

        match self.flow.process(&self.record, &ctx).await {
            Ok(()) => {
                self.success_message = Some(SUCCESS_MESSAGE.to_string());
                self.error_message = None;
                // 提交成功后整体重置，准备下一次填写
                self.record.reset();
            }
            Err(e) => {
                error!("提交失败: {}", e);
                // 保留已填内容，用户修正后可以直接重试
                self.error_message = Some(FAILURE_MESSAGE.to_string());
            }
        }

        self.submitting = false;
    }
}
