//! 批量作者处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责作者名单的批量处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：输出启动日志、保存配置
//! 2. **名单加载**：一次性读入作者名单（`Vec<String>`）
//! 3. **顺序处理**：按名单顺序逐个查询，保持输出行序与输入行序一致
//! 4. **失败策略**：可恢复错误按 0 篇计并继续，结构层错误终止批次
//! 5. **全局统计**：汇总成功/失败/跳过数量
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个作者的查询细节
//! - **严格顺序**：无并发，一个作者的网络往返完成后才处理下一个
//! - **向下委托**：委托 workflow::AuthorFlow 处理单个作者

use crate::config::Config;
use crate::models::load_author_file;
use crate::workflow::{AuthorCtx, AuthorFlow, LookupOutcome};
use anyhow::Result;
use tracing::{debug, error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<BatchStats> {
        // 加载作者名单（名单文件缺失时在创建输出文件之前就终止）
        let lines = load_author_file(&self.config.input_file).await?;

        // 输出文件在名单读取成功后立即创建（截断旧内容），
        // 名单中没有作者时也会留下一个空的输出文件
        let mut flow = AuthorFlow::new(&self.config)?;

        let total = lines.iter().filter(|l| !l.trim().is_empty()).count();
        let mut stats = BatchStats {
            total,
            ..Default::default()
        };

        if total == 0 {
            // 此时名单里的每一行都是空行
            stats.skipped = lines.len();
            warn!("⚠️ 名单中没有可处理的作者，程序结束");
            print_final_stats(&stats, &self.config);
            return Ok(stats);
        }

        log_authors_loaded(total);

        // 逐个处理（顺序、阻塞式：一个作者查询完成后才开始下一个）
        let mut index = 0usize;
        for (line_no, line) in lines.iter().enumerate() {
            let author = line.trim();
            if author.is_empty() {
                debug!("跳过空行 (第 {} 行)", line_no + 1);
                stats.skipped += 1;
                continue;
            }

            index += 1;
            let ctx = AuthorCtx::new(author.to_string(), index, total);

            match flow.run(&ctx).await {
                Ok(LookupOutcome::Found(_)) => stats.found += 1,
                Ok(LookupOutcome::Failed) => stats.failed += 1,
                Err(e) => {
                    error!("❌ {} 处理失败，终止批次: {}", ctx, e);
                    return Err(e);
                }
            }
        }

        info!("📋 共写入 {} 行结果", flow.lines_written());

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(stats)
    }
}

/// 批次处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// 查询成功的作者数
    pub found: usize,
    /// 查询失败、按 0 篇记录的作者数
    pub failed: usize,
    /// 跳过的空行数
    pub skipped: usize,
    /// 非空行总数
    pub total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - DBLP 作者出版物统计");
    info!("📄 作者名单: {}", config.input_file);
    info!("📊 结果输出: {}", config.output_file);
    info!("{}", "=".repeat(60));
}

fn log_authors_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的作者", total);
    info!("💡 按名单顺序逐个查询，一个完成后再开始下一个\n");
}

fn print_final_stats(stats: &BatchStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 查询成功: {}/{}", stats.found, stats.total);
    info!("❌ 查询失败（按 0 篇计）: {}", stats.failed);
    info!("跳过空行: {}", stats.skipped);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", config.output_file);
}
