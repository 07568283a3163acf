//! 结果写入服务 - 业务能力层
//!
//! 只负责"写结果文件"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::record::PublicationRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use tracing::debug;

/// 结果写入服务
///
/// 职责：
/// - 将单条统计结果按固定格式写入输出文件
/// - 文件以截断模式打开一次，句柄在整个批次期间持有
/// - 逐条直写，批次中途出错时已写入的行保留在文件中
/// - 不关心流程顺序
pub struct ReportWriter {
    file: File,
    output_path: String,
    lines_written: usize,
}

impl ReportWriter {
    /// 以截断模式创建（或覆盖）输出文件
    ///
    /// # 参数
    /// - `path`: 输出文件路径，已有内容会被清空
    pub fn create(path: impl Into<String>) -> AppResult<Self> {
        let output_path = path.into();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&output_path)
            .map_err(|e| AppError::file_create_failed(output_path.clone(), e))?;

        Ok(Self {
            file,
            output_path,
            lines_written: 0,
        })
    }

    /// 写入一条统计结果（每条占一行）
    pub fn append(&mut self, record: &PublicationRecord) -> AppResult<()> {
        debug!("写入结果: {}", record);

        let line = format!("{}\n", record);
        self.file
            .write_all(line.as_bytes())
            .map_err(|e| AppError::file_write_failed(self.output_path.clone(), e))?;

        self.lines_written += 1;
        Ok(())
    }

    /// 已写入的行数
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}
