/// 单个作者的出版物统计结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    /// 作者名（已去除首尾空白）
    pub author: String,
    /// 出版物数量（查询失败时按 0 记录）
    pub count: u64,
}

impl PublicationRecord {
    pub fn new(author: impl Into<String>, count: u64) -> Self {
        Self {
            author: author.into(),
            count,
        }
    }
}

/// 输出文件中每行的固定格式
impl std::fmt::Display for PublicationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} papers", self.author, self.count)
    }
}
