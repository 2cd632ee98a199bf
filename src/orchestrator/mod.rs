//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量记录处理器
//! - 管理应用生命周期（初始化、运行、清理）
//! - 批量加载申请记录（Vec<SubmissionRecord>）
//! - 控制并发数量（Semaphore）
//! - 持有共享的 HTTP 客户端
//! - 输出全局统计信息
//!
//! ### `record_processor` - 单条记录处理器
//! - 处理单条申请记录的完整生命周期
//! - 委托 SubmitFlow 执行校验 → 上传 → 投递
//! - 拒绝和失败时写入 warn.txt
//! - 成功后清理源文件
//! - 输出单条记录的处理结果
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SubmissionRecord>)
//!     ↓
//! record_processor (处理单条 SubmissionRecord)
//!     ↓
//! workflow::SubmitFlow (校验 → 上传 → 投递)
//!     ↓
//! services (能力层：validator / warn_writer)
//!     ↓
//! clients (外部协作方：media / email)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，record_processor 管单条
//! 2. **资源隔离**：只有编排层持有共享 HTTP 客户端并分发
//! 3. **向下依赖**：编排层 → workflow → services → clients
//! 4. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod batch_processor;
pub mod record_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use record_processor::process_record;
