use crate::error::{AppError, AppResult, FileError};
use std::path::Path;
use tokio::fs;

/// 从名单文件读取所有行（一次性读入内存，不做流式处理）
///
/// 返回文件的原始行内容，首尾空白的清理和空行的跳过由批处理流程负责
pub async fn load_author_file(path: &str) -> AppResult<Vec<String>> {
    if !Path::new(path).exists() {
        return Err(FileError::NotFound {
            path: path.to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    tracing::info!("📄 已读取作者名单 {} ({} 行)", path, lines.len());

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_author_file_keeps_raw_lines() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("authors.txt");
        std::fs::write(&path, "Alice Smith\n\n  Bob Jones  \n").expect("写入测试文件失败");

        let lines = load_author_file(path.to_str().unwrap())
            .await
            .expect("读取名单失败");

        // 原始行保持原样，包括空行和首尾空白
        assert_eq!(lines, vec!["Alice Smith", "", "  Bob Jones  "]);
    }

    #[tokio::test]
    async fn test_load_author_file_missing() {
        let result = load_author_file("no_such_authors.txt").await;

        match result {
            Err(AppError::File(FileError::NotFound { path })) => {
                assert_eq!(path, "no_such_authors.txt");
            }
            other => panic!("预期 NotFound 错误, 实际: {:?}", other),
        }
    }
}
