// 公开导出的模块，供外部使用
pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod view;

#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use api::base::StockApi;
pub use api::http::HttpStockApi;
pub use config::Config;
pub use errors::{Result, ViewError};
pub use models::stock::{Company, HistoryEntry, StockQuote, StockRecord, StockResponse};
pub use models::tab::ActiveTab;
pub use services::controller::{SearchOutcome, SearchTicket, StockViewController};
pub use view::{Page, Row};
