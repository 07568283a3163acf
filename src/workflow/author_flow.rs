//! 作者处理流程 - 流程层
//!
//! 核心职责：定义"一个作者"的完整处理流程
//!
//! 流程顺序：
//! 1. 查询 DBLP 出版物数量
//! 2. 可恢复错误按 0 篇计（兜底）
//! 3. 结果写入输出文件

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::DblpClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::record::PublicationRecord;
use crate::services::ReportWriter;
use crate::workflow::author_ctx::AuthorCtx;

/// 单个作者的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// 查询成功，得到出版物数量
    Found(u64),
    /// 查询失败（网络层错误），按 0 篇计
    Failed,
}

impl LookupOutcome {
    /// 写入输出文件时使用的数量
    pub fn count(&self) -> u64 {
        match self {
            LookupOutcome::Found(count) => *count,
            LookupOutcome::Failed => 0,
        }
    }
}

/// 作者处理流程
///
/// 职责：
/// - 编排单个作者的"查询 → 记录"流程
/// - 决定查询失败时的记录策略：可恢复错误按 0 篇计并继续
/// - 结构层错误原样向上传播，由编排层终止批次
/// - 不关心名单顺序，也不做统计汇总
pub struct AuthorFlow {
    client: DblpClient,
    writer: ReportWriter,
}

impl AuthorFlow {
    /// 创建新的作者处理流程
    ///
    /// 创建时即以截断模式打开输出文件，旧内容被清空
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: DblpClient::new(config)?,
            writer: ReportWriter::create(config.output_file.clone())?,
        })
    }

    pub async fn run(&mut self, ctx: &AuthorCtx) -> Result<LookupOutcome> {
        info!("[作者 {}] 🔍 Processing {}...", ctx.index, ctx.author);

        // ========== 步骤 1: 查询出版物数量 ==========
        let outcome = match self.client.publication_count(&ctx.author).await {
            Ok(count) => LookupOutcome::Found(count),
            Err(e) if e.is_recoverable() => {
                warn!(
                    "[作者 {}] ⚠️ Error fetching data for {}: {}",
                    ctx.index, ctx.author, e
                );
                LookupOutcome::Failed
            }
            // 结构层错误归入应用错误后终止整个批次
            Err(e) => return Err(AppError::from(e).into()),
        };

        // ========== 步骤 2: 记录结果 ==========
        let record = PublicationRecord::new(ctx.author.clone(), outcome.count());
        self.writer.append(&record)?;

        info!(
            "[作者 {}] ✓ Found {} papers for {}",
            ctx.index,
            outcome.count(),
            ctx.author
        );

        Ok(outcome)
    }

    /// 已写入输出文件的行数
    pub fn lines_written(&self) -> usize {
        self.writer.lines_written()
    }
}
