use crate::models::stock::StockQuote;

pub const UP_ARROW: &str = "▲";
pub const DOWN_ARROW: &str = "▼";
pub const POSITIVE_CLASS: &str = "change-positive";
pub const NEGATIVE_CLASS: &str = "change-negative";
pub const NO_CHANGE: &str = "N/A";

/// 去掉首尾空白并转为大写；空串表示输入无效
pub fn normalize_ticker(raw: &str) -> Option<String> {
    let ticker = raw.trim().to_ascii_uppercase();
    if ticker.is_empty() {
        None
    } else {
        Some(ticker)
    }
}

/// ISO 时间戳中 `T` 之前的日期部分
pub fn trading_day(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Day-over-day movement of the last price against the previous close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub change: f64,
    pub percent: f64,
}

impl PriceChange {
    /// `None` when the quote lacks a last price or a previous close.
    pub fn from_quote(quote: &StockQuote) -> Option<Self> {
        match (quote.prev_close, quote.last) {
            (Some(prev_close), Some(last)) => Some(Self::new(prev_close, last)),
            _ => None,
        }
    }

    pub fn new(prev_close: f64, last: f64) -> Self {
        let change = last - prev_close;
        Self {
            change,
            percent: change / prev_close * 100.0,
        }
    }

    // 零变动视为上涨
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    pub fn arrow(&self) -> &'static str {
        if self.is_up() {
            UP_ARROW
        } else {
            DOWN_ARROW
        }
    }

    pub fn class(&self) -> &'static str {
        if self.is_up() {
            POSITIVE_CLASS
        } else {
            NEGATIVE_CLASS
        }
    }

    pub fn change_text(&self) -> String {
        format!("{} {}", fixed2(self.change), self.arrow())
    }

    pub fn percent_text(&self) -> String {
        if self.percent.is_finite() {
            format!("{}% {}", fixed2(self.percent), self.arrow())
        } else {
            format!("N/A {}", self.arrow())
        }
    }
}

// 行情字段为 null 时显示空单元格
pub fn or_blank<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Two decimal places; non-finite values (zero previous close) render as `N/A`.
pub fn fixed2(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "N/A".to_string()
    }
}
