//! DBLP API 客户端 - 基础设施层
//!
//! 负责所有与 DBLP 出版物搜索接口的交互

use crate::config::Config;
use crate::error::ApiError;
use crate::models::dblp::DblpResponse;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// DBLP 客户端
///
/// 职责：
/// - 按作者名发起出版物搜索请求（GET /search/publ/api?q=...&format=json）
/// - 区分网络层错误（可恢复）与结构层错误（不可恢复）
/// - 不关心批处理流程，也不做结果记录
pub struct DblpClient {
    http: reqwest::Client,
    api_url: String,
}

impl DblpClient {
    /// 创建新的 DBLP 客户端
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("创建 HTTP 客户端失败")?;

        Ok(Self {
            http,
            api_url: config.dblp_api_url.clone(),
        })
    }

    /// 搜索作者的出版物
    ///
    /// # 参数
    /// - `author`: 作者名，原样作为查询词（URL 转义由 HTTP 层处理）
    ///
    /// # 返回
    /// 返回完整的搜索响应
    pub async fn search_publications(&self, author: &str) -> Result<DblpResponse, ApiError> {
        debug!("请求 DBLP: q={}", author);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("q", author), ("format", "json")])
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed {
                url: self.api_url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus {
                url: self.api_url.clone(),
                status: status.as_u16(),
            });
        }

        // 响应体读取失败归为网络层错误，JSON 解析失败归为结构层错误
        let body = response.text().await.map_err(|e| ApiError::RequestFailed {
            url: self.api_url.clone(),
            source: Box::new(e),
        })?;

        let parsed: DblpResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::SchemaMismatch {
                source: Box::new(e),
            })?;

        Ok(parsed)
    }

    /// 查询作者的出版物数量
    ///
    /// # 参数
    /// - `author`: 作者名
    ///
    /// # 返回
    /// 命中的出版物总数；出错时由调用方根据 `ApiError::is_recoverable`
    /// 决定按 0 记录还是终止批次
    pub async fn publication_count(&self, author: &str) -> Result<u64, ApiError> {
        let response = self.search_publications(author).await?;
        Ok(response.result.hits.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_config(api_url: String) -> Config {
        Config {
            dblp_api_url: api_url,
            request_timeout_secs: 5,
            ..Config::default()
        }
    }

    fn dblp_body(total: &str) -> String {
        format!(
            r#"{{ "result": {{ "query": "test", "hits": {{ "@total": "{}", "@sent": "0", "hit": [] }} }} }}"#,
            total
        )
    }

    #[tokio::test]
    async fn test_publication_count_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/publ/api")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Alice Smith".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(dblp_body("12"))
            .create_async()
            .await;

        let config = test_config(format!("{}/search/publ/api", server.url()));
        let client = DblpClient::new(&config).expect("创建客户端失败");

        let count = client
            .publication_count("Alice Smith")
            .await
            .expect("查询失败");

        assert_eq!(count, 12);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bad_status_is_recoverable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/publ/api")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let config = test_config(format!("{}/search/publ/api", server.url()));
        let client = DblpClient::new(&config).expect("创建客户端失败");

        let err = client
            .publication_count("Alice Smith")
            .await
            .expect_err("预期错误状态");

        assert!(err.is_recoverable(), "HTTP 500 应为可恢复错误");
        match err {
            ApiError::BadStatus { status, .. } => assert_eq!(status, 500),
            other => panic!("预期 BadStatus, 实际: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_error_is_recoverable() {
        // 没有服务监听的端口，请求直接失败
        let config = test_config("http://127.0.0.1:1/search/publ/api".to_string());
        let client = DblpClient::new(&config).expect("创建客户端失败");

        let err = client
            .publication_count("Alice Smith")
            .await
            .expect_err("预期连接失败");

        assert!(err.is_recoverable(), "连接失败应为可恢复错误");
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_fatal() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/publ/api")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "result": { "status": "ok" } }"#)
            .create_async()
            .await;

        let config = test_config(format!("{}/search/publ/api", server.url()));
        let client = DblpClient::new(&config).expect("创建客户端失败");

        let err = client
            .publication_count("Alice Smith")
            .await
            .expect_err("预期结构错误");

        assert!(!err.is_recoverable(), "结构错误应为不可恢复错误");
        match err {
            ApiError::SchemaMismatch { .. } => {}
            other => panic!("预期 SchemaMismatch, 实际: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_total_as_integer_accepted() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/publ/api")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "result": { "hits": { "@total": 7 } } }"#)
            .create_async()
            .await;

        let config = test_config(format!("{}/search/publ/api", server.url()));
        let client = DblpClient::new(&config).expect("创建客户端失败");

        let count = client
            .publication_count("Alice Smith")
            .await
            .expect("查询失败");

        assert_eq!(count, 7);
    }

    /// 对真实 DBLP 服务的连通性测试
    #[tokio::test]
    #[ignore]
    async fn test_live_dblp_query() {
        let _ = tracing_subscriber::fmt::try_init();

        let client = DblpClient::new(&Config::default()).expect("创建客户端失败");

        println!("\n========== 测试真实 DBLP 查询 ==========");
        match client.publication_count("Donald E. Knuth").await {
            Ok(count) => {
                println!("✅ 查询成功: {} 篇出版物", count);
                assert!(count > 0, "Knuth 的出版物数量应大于 0");
            }
            Err(e) => {
                println!("❌ 查询失败: {}", e);
                panic!("测试失败: {}", e);
            }
        }
    }
}
