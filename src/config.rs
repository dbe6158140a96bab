use std::time::Duration;

use crate::models::tab::ActiveTab;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const NOT_FOUND_MESSAGE: &str = "Error : No record has been found, please enter a valid symbol.";
pub const HISTORY_ERROR_MESSAGE: &str = "Error : Unable to load search history.";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
    pub use_system_proxy: bool,
    pub initial_tab: ActiveTab,
    pub clear_discards_record: bool, // clear() 是否同时丢弃内存中的行情数据
    pub not_found_message: String,
    pub history_error_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            use_system_proxy: true,
            initial_tab: ActiveTab::Outlook,
            clear_discards_record: false,
            not_found_message: NOT_FOUND_MESSAGE.to_string(),
            history_error_message: HISTORY_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }

    pub fn with_initial_tab(mut self, tab: ActiveTab) -> Self {
        self.initial_tab = tab;
        self
    }

    pub fn with_clear_discards_record(mut self, discard: bool) -> Self {
        self.clear_discards_record = discard;
        self
    }

    pub fn with_not_found_message(mut self, message: &str) -> Self {
        self.not_found_message = message.to_string();
        self
    }

    pub fn with_history_error_message(mut self, message: &str) -> Self {
        self.history_error_message = message.to_string();
        self
    }
}
