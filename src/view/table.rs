use crate::models::stock::HistoryEntry;

/// 表格中的一行：标签 / 值，以及值单元格上可选的 class
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: String,
    pub class: Option<&'static str>,
}

impl Row {
    pub fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            class: None,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Two-column key/value table, rows in the given order.
pub fn render_table(rows: &[Row]) -> String {
    let mut html = String::from("<table><tbody>");
    for row in rows {
        let td_class = row
            .class
            .map(|c| format!(" class=\"{}\"", escape_html(c)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<tr><th>{}</th><td{}>{}</td></tr>",
            escape_html(&row.label),
            td_class,
            escape_html(&row.value)
        ));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn render_history_table(entries: &[HistoryEntry]) -> String {
    let mut html = String::from(
        "<table><thead><tr><th>Stock Ticker Symbol</th><th>Search Timestamp</th></tr></thead><tbody>",
    );
    for entry in entries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.ticker),
            escape_html(&entry.timestamp)
        ));
    }
    html.push_str("</tbody></table>");
    html
}
