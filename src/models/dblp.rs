use serde::Deserialize;

/// DBLP 出版物搜索接口响应
///
/// 只建模统计所需的字段路径 result.hits.@total，
/// 响应中的其余内容（hit 列表、耗时统计等）在反序列化时直接忽略
#[derive(Debug, Clone, Deserialize)]
pub struct DblpResponse {
    pub result: DblpResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DblpResult {
    pub hits: DblpHits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DblpHits {
    /// 命中的出版物总数
    ///
    /// DBLP 实际返回的是字符串（如 "42"），但接口未作保证，
    /// 字符串和整数两种形式都接受
    #[serde(rename = "@total", deserialize_with = "deserialize_total")]
    pub total: u64,
}

// Helper function to deserialize @total as either string or integer
fn deserialize_total<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct TotalVisitor;

    impl<'de> Visitor<'de> for TotalVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer representing a count")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value.trim().parse::<u64>().map_err(E::custom)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value).map_err(E::custom)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }
    }

    deserializer.deserialize_any(TotalVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_total_as_string() {
        // DBLP 实际返回的形式
        let json = r#"{
            "result": {
                "query": "Alice Smith",
                "hits": { "@total": "42", "@computed": "42", "@sent": "30", "hit": [] }
            }
        }"#;
        let resp: DblpResponse = serde_json::from_str(json).expect("解析响应失败");
        assert_eq!(resp.result.hits.total, 42);
    }

    #[test]
    fn test_parse_total_as_integer() {
        let json = r#"{ "result": { "hits": { "@total": 7 } } }"#;
        let resp: DblpResponse = serde_json::from_str(json).expect("解析响应失败");
        assert_eq!(resp.result.hits.total, 7);
    }

    #[test]
    fn test_parse_total_zero() {
        let json = r#"{ "result": { "hits": { "@total": "0" } } }"#;
        let resp: DblpResponse = serde_json::from_str(json).expect("解析响应失败");
        assert_eq!(resp.result.hits.total, 0);
    }

    #[test]
    fn test_missing_total_is_error() {
        let json = r#"{ "result": { "hits": { "@sent": "30" } } }"#;
        let result: Result<DblpResponse, _> = serde_json::from_str(json);
        assert!(result.is_err(), "缺少 @total 字段时应解析失败");
    }

    #[test]
    fn test_missing_hits_is_error() {
        let json = r#"{ "result": { "query": "Alice Smith" } }"#;
        let result: Result<DblpResponse, _> = serde_json::from_str(json);
        assert!(result.is_err(), "缺少 hits 字段时应解析失败");
    }

    #[test]
    fn test_non_numeric_total_is_error() {
        let json = r#"{ "result": { "hits": { "@total": "many" } } }"#;
        let result: Result<DblpResponse, _> = serde_json::from_str(json);
        assert!(result.is_err(), "@total 不是数字时应解析失败");
    }
}
