//! 作者处理上下文
//!
//! 封装"我正在处理名单中的第几个作者"这一信息

use std::fmt::Display;

/// 作者处理上下文
///
/// 包含处理单个作者所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct AuthorCtx {
    /// 作者名（已去除首尾空白）
    pub author: String,

    /// 作者在名单中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 名单中的作者总数
    pub total: usize,
}

impl AuthorCtx {
    /// 创建新的作者上下文
    pub fn new(author: String, index: usize, total: usize) -> Self {
        Self {
            author,
            index,
            total,
        }
    }
}

impl Display for AuthorCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[作者 {}/{}: {}]", self.index, self.total, self.author)
    }
}
