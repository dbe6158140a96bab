use crate::api::base::StockApi;
use crate::config::Config;
use crate::errors::{Result, ViewError};
use crate::models::stock::{HistoryEntry, StockResponse};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::Deserialize;

/// 后端 404 时返回的错误体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// 基于 reqwest 的后端接口实现
pub struct HttpStockApi {
    client: Client,
    base_url: Url,
}

impl HttpStockApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.request_timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ViewError::RequestError)?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ViewError::ConfigError(format!("invalid base url {}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ViewError::ConfigError(format!("base url cannot be a base: {}", config.base_url)));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接路径段，ticker 会被百分号编码
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ViewError::ConfigError(format!("base url cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl StockApi for HttpStockApi {
    async fn fetch_stock(&self, ticker: &str) -> Result<StockResponse> {
        let url = self.endpoint(&["api", "stock", ticker])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => warn!("Stock lookup for {} failed with {}: {}", ticker, status, body.error),
                Err(_) => warn!("Stock lookup for {} failed with {}", ticker, status),
            }
            return Err(ViewError::NotFound(ticker.to_string()));
        }

        let text = response.text().await?;
        let body: StockResponse = serde_json::from_str(&text)?;
        Ok(body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        let url = self.endpoint(&["history"])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ViewError::Http(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown").to_string(),
            ));
        }

        let text = response.text().await?;
        let entries: Vec<HistoryEntry> = serde_json::from_str(&text)?;
        debug!("Received {} history entries", entries.len());
        Ok(entries)
    }
}
