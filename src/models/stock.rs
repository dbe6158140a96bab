use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 公司概览信息（Outlook 标签页）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub ticker: String,
    pub exchange_code: String,
    pub start_date: String,
    pub description: String,
}

/// 当日行情（Summary 标签页）
///
/// Numeric fields must be present but may be `null`; IEX reports nulls
/// before the session opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub ticker: String,
    pub timestamp: String,
    #[serde(deserialize_with = "nullable")]
    pub prev_close: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub open: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub high: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub low: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub last: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub volume: Option<u64>,
}

/// One successful lookup. Every key is required, so a partially
/// populated record fails to deserialize instead of being stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub company: Company,
    #[serde(deserialize_with = "quote_or_first")]
    pub stock: StockQuote,
}

/// `/api/stock/{TICKER}` 的成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockResponse {
    pub data: StockRecord,
    #[serde(default)]
    pub cached: bool,
}

/// 搜索历史记录，按服务端返回顺序展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ticker: String,
    pub timestamp: String,
}

// 字段必须存在，值可以为 null
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

// IEX 行情接口有时返回单元素数组
fn quote_or_first<'de, D>(deserializer: D) -> std::result::Result<StockQuote, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| <D::Error as de::Error>::custom("empty stock quote list"))?,
        other => other,
    };

    serde_json::from_value(value)
        .map_err(|e| <D::Error as de::Error>::custom(format!("invalid stock quote: {}", e)))
}
