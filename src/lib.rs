//! # DBLP Paper Count
//!
//! 一个批量统计 DBLP 作者出版物数量的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只暴露查询能力
//! - `DblpClient` - 唯一的 DBLP 接口调用方，提供 publication_count() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单条记录
//! - `ReportWriter` - 写结果文件能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个作者"的完整处理流程
//! - `AuthorCtx` - 上下文封装（作者名 + 名单序号）
//! - `AuthorFlow` - 流程编排（查询 → 兜底 → 记录）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量作者处理器，顺序遍历名单
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
pub use clients::DblpClient;
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, FileError};
pub use models::record::PublicationRecord;
pub use models::{load_author_file, DblpResponse};
pub use orchestrator::{App, BatchStats};
pub use services::ReportWriter;
pub use workflow::{AuthorCtx, AuthorFlow, LookupOutcome};
