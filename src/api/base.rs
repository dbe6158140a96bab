use crate::models::stock::{HistoryEntry, StockResponse};
use crate::errors::Result;
use async_trait::async_trait;

/// Collaborator endpoints the view controller reads from
#[async_trait]
pub trait StockApi {
    /// Fetch company and quote data for an already normalised ticker.
    /// Any non-success status maps to `ViewError::NotFound`.
    async fn fetch_stock(&self, ticker: &str) -> Result<StockResponse>;

    /// Fetch recent searches, in the order the backend returns them
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>>;
}
