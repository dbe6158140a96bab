use crate::api::base::StockApi;
use crate::config::Config;
use crate::errors::{Result, ViewError};
use crate::models::stock::{HistoryEntry, StockRecord, StockResponse};
use crate::models::tab::ActiveTab;
use crate::util::{self, PriceChange};
use crate::view::page::{Page, REQUIRED_FIELD_MESSAGE};
use crate::view::table::{self, Row};
use log::{debug, error, info, warn};

/// 一次搜索的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 输入为空，未发出请求
    Rejected,
    Found,
    NotFound,
    /// 已有更新的搜索，响应被丢弃
    Stale,
}

/// An issued stock search. Only the most recently issued ticket may
/// update the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    ticker: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryTicket {
    seq: u64,
}

/// 股票查询页面的视图控制器
///
/// Owns the last successful [`StockRecord`], the active tab and the page
/// regions it writes to. All operations run on a single task; overlapping
/// requests are resolved by sequence number rather than cancellation.
pub struct StockViewController<A: StockApi> {
    api: A,
    config: Config,
    record: Option<StockRecord>,
    active_tab: ActiveTab,
    page: Page,
    search_seq: u64,
    history_seq: u64,
}

impl<A: StockApi> StockViewController<A> {
    pub fn new(api: A, config: Config) -> Self {
        let active_tab = config.initial_tab;
        Self {
            api,
            config,
            record: None,
            active_tab,
            page: Page::new(),
            search_seq: 0,
            history_seq: 0,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn record(&self) -> Option<&StockRecord> {
        self.record.as_ref()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 提交搜索表单
    pub async fn submit_search(&mut self, raw_input: &str) -> SearchOutcome {
        let ticket = match self.begin_search(raw_input) {
            Ok(ticket) => ticket,
            Err(e) => {
                debug!("Search rejected: {}", e);
                return SearchOutcome::Rejected;
            }
        };

        let result = self.api.fetch_stock(&ticket.ticker).await;
        self.complete_search(ticket, result)
    }

    /// First half of a search: validates the input and issues a ticket.
    /// Fails with `ViewError::Validation` when the input is blank; no
    /// request should be made.
    pub fn begin_search(&mut self, raw_input: &str) -> Result<SearchTicket> {
        self.page.input = raw_input.to_string();
        self.page.validation_message = None;
        self.page.clear_error();

        let ticker = match util::normalize_ticker(raw_input) {
            Some(ticker) => ticker,
            None => {
                self.page.report_validity();
                return Err(ViewError::Validation(REQUIRED_FIELD_MESSAGE.to_string()));
            }
        };

        self.search_seq += 1;
        info!("Searching for {} (request #{})", ticker, self.search_seq);
        Ok(SearchTicket {
            seq: self.search_seq,
            ticker,
        })
    }

    /// Second half of a search: applies the response if the ticket is
    /// still the latest one.
    pub fn complete_search(&mut self, ticket: SearchTicket, result: Result<StockResponse>) -> SearchOutcome {
        if ticket.seq != self.search_seq {
            debug!(
                "Discarding stale response for {} (request #{}, latest #{})",
                ticket.ticker, ticket.seq, self.search_seq
            );
            return SearchOutcome::Stale;
        }

        match result {
            Ok(response) => {
                debug!("Received {} (cached: {})", ticket.ticker, response.cached);
                self.record = Some(response.data);
                self.active_tab = ActiveTab::Outlook;
                self.render_outlook();
                SearchOutcome::Found
            }
            Err(e) => {
                // 不区分失败原因，统一提示
                warn!("Lookup for {} failed: {}", ticket.ticker, e);
                self.page.set_error(&self.config.not_found_message);
                SearchOutcome::NotFound
            }
        }
    }

    /// 清空输入框、错误提示和内容区
    pub fn clear(&mut self) {
        self.page.clear();
        // 迟到的历史响应不应重新填充内容区
        self.history_seq += 1;

        if self.config.clear_discards_record {
            debug!("Discarding stock record on clear");
            self.record = None;
            self.search_seq += 1;
        }
    }

    /// Activates `tab` and renders it. Returns `false` when it was already
    /// active, in which case nothing is rendered or fetched.
    pub async fn select_tab(&mut self, tab: ActiveTab) -> bool {
        if tab == self.active_tab {
            return false;
        }
        self.active_tab = tab;

        if tab.needs_record() && self.record.is_none() {
            debug!("No stock record loaded, leaving {} tab content as-is", tab);
            return true;
        }

        match tab {
            ActiveTab::History => self.render_history().await,
            ActiveTab::Outlook => {
                self.render_outlook();
            }
            ActiveTab::Summary => {
                self.render_summary();
            }
        }
        true
    }

    pub async fn select_tab_named(&mut self, name: &str) -> Result<bool> {
        let tab: ActiveTab = name.parse()?;
        Ok(self.select_tab(tab).await)
    }

    /// 渲染公司概览；未加载数据时返回 false
    pub fn render_outlook(&mut self) -> bool {
        let rows = match &self.record {
            Some(record) => outlook_rows(record),
            None => return false,
        };
        self.render_table(&rows);
        true
    }

    /// 渲染行情摘要；未加载数据时返回 false
    pub fn render_summary(&mut self) -> bool {
        let rows = match &self.record {
            Some(record) => summary_rows(record),
            None => return false,
        };
        self.render_table(&rows);
        true
    }

    /// Fetches `/history` and renders it into the History tab.
    pub async fn render_history(&mut self) {
        let ticket = self.begin_history();
        let result = self.api.fetch_history().await;
        self.complete_history(ticket, result);
    }

    pub fn begin_history(&mut self) -> HistoryTicket {
        self.history_seq += 1;
        HistoryTicket { seq: self.history_seq }
    }

    /// Applies a history response. Responses for an outdated request, or
    /// arriving after the History tab was left, are dropped.
    pub fn complete_history(&mut self, ticket: HistoryTicket, result: Result<Vec<HistoryEntry>>) -> bool {
        if ticket.seq != self.history_seq || self.active_tab != ActiveTab::History {
            debug!("Discarding stale history response (request #{})", ticket.seq);
            return false;
        }

        match result {
            Ok(entries) => {
                if self.page.error_message == self.config.history_error_message {
                    self.page.clear_error();
                }
                self.page.set_content(table::render_history_table(&entries));
            }
            Err(e) => {
                error!("Failed to load search history: {}", e);
                self.page.set_content(String::new());
                self.page.set_error(&self.config.history_error_message);
            }
        }
        true
    }

    /// 用给定的行替换内容区
    pub fn render_table(&mut self, rows: &[Row]) {
        self.page.set_content(table::render_table(rows));
    }
}

fn outlook_rows(record: &StockRecord) -> Vec<Row> {
    let c = &record.company;
    vec![
        Row::new("Company Name", &c.name),
        Row::new("Stock Ticker Symbol", &c.ticker),
        Row::new("Exchange Code", &c.exchange_code),
        Row::new("Start Date", &c.start_date),
        Row::new("Description", &c.description).with_class("desc-cell"),
    ]
}

fn summary_rows(record: &StockRecord) -> Vec<Row> {
    let s = &record.stock;
    // 缺少最新价或昨收价时无法计算涨跌
    let (change, percent) = match PriceChange::from_quote(s) {
        Some(c) => (
            Row::new("Change", c.change_text()).with_class(c.class()),
            Row::new("Change Percent", c.percent_text()).with_class(c.class()),
        ),
        None => (
            Row::new("Change", util::NO_CHANGE),
            Row::new("Change Percent", util::NO_CHANGE),
        ),
    };
    vec![
        Row::new("Stock Ticker Symbol", &s.ticker),
        Row::new("Trading Day", util::trading_day(&s.timestamp)),
        Row::new("Previous Closing Price", util::or_blank(s.prev_close)),
        Row::new("Opening Price", util::or_blank(s.open)),
        Row::new("High Price", util::or_blank(s.high)),
        Row::new("Low Price", util::or_blank(s.low)),
        Row::new("Last Price", util::or_blank(s.last)),
        change,
        percent,
        Row::new("Number of Shares Traded", util::or_blank(s.volume)),
    ]
}
