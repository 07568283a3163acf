/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 作者名单文件（每行一个作者名）
    pub input_file: String,
    /// 统计结果输出文件
    pub output_file: String,
    // --- DBLP API 配置 ---
    /// DBLP 出版物搜索接口地址
    pub dblp_api_url: String,
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "authors.txt".to_string(),
            output_file: "author_papers.txt".to_string(),
            dblp_api_url: "https://dblp.org/search/publ/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_file: std::env::var("INPUT_FILE").unwrap_or(default.input_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            dblp_api_url: std::env::var("DBLP_API_URL").unwrap_or(default.dblp_api_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
        }
    }
}
