//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量作者处理器
//! - 管理应用生命周期（初始化、运行）
//! - 一次性加载作者名单（Vec<String>）
//! - 按名单顺序逐个处理，保持输出行序与输入行序一致
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理整个名单)
//!     ↓
//! workflow::AuthorFlow (处理单个作者)
//!     ↓
//! services (能力层：写结果文件)
//!     ↓
//! clients (基础设施：DblpClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管名单，AuthorFlow 管单个作者
//! 2. **严格顺序**：不引入并发，一个作者完成后再处理下一个
//! 3. **向下依赖**：编排层 → workflow → services → clients
//! 4. **无业务逻辑**：只做调度和统计，不做具体查询判断

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
