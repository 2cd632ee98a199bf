//! # Agent Intake Submit
//!
//! 一个用于自动化提交新代理入职申请的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 外部协作层（Clients）
//! - `clients/` - 封装两个外部依赖，只暴露窄接口
//! - `MediaClient` - 媒体托管上传能力（文件 → 托管 URL）
//! - `EmailClient` - 邮件投递能力（载荷 → 状态码）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单条记录
//! - `Validator` - 字段校验能力（纯函数，无 I/O）
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一条申请记录"的完整提交流程
//! - `SubmitCtx` - 上下文封装（申请人 + 记录索引 + 来源）
//! - `SubmitFlow` - 流程编排（校验 → 顺序上传 → 投递）
//! - `FormState` - 交互式表单状态机（记录 + 错误 + 状态位）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量记录处理器，管理资源和并发
//! - `orchestrator/record_processor` - 单条记录处理器，兜底与清理
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{EmailClient, EmailDelivery, MediaClient, MediaUpload};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ErrorRecord, Field, SubmissionRecord, UsState};
pub use orchestrator::{process_record, App};
pub use workflow::{FormState, SubmitCtx, SubmitFlow, SubmitOutcome};
