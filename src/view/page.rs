use crate::models::tab::ActiveTab;

pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill out this field.";

/// 页面上由控制器写入的各个区域
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// 搜索框当前内容
    pub input: String,
    /// 输入框原生校验提示
    pub validation_message: Option<String>,
    pub error_message: String,
    /// 标签页内容区的 HTML
    pub content: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_validity(&mut self) {
        self.validation_message = Some(REQUIRED_FIELD_MESSAGE.to_string());
    }

    pub fn set_error(&mut self, message: &str) {
        self.error_message = message.to_string();
    }

    pub fn clear_error(&mut self) {
        self.error_message.clear();
    }

    pub fn set_content(&mut self, html: String) {
        self.content = html;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.validation_message = None;
        self.error_message.clear();
        self.content.clear();
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Plain-text snapshot used by the CLI.
    pub fn render_text(&self, active: ActiveTab) -> String {
        let tabs: Vec<String> = ActiveTab::ALL
            .iter()
            .map(|tab| {
                if *tab == active {
                    format!("[{}]", tab.as_str())
                } else {
                    tab.as_str().to_string()
                }
            })
            .collect();

        let mut out = tabs.join(" ");
        if let Some(msg) = &self.validation_message {
            out.push_str(&format!("\n{}", msg));
        }
        if self.has_error() {
            out.push_str(&format!("\n{}", self.error_message));
        }
        if !self.content.is_empty() {
            out.push_str(&format!("\n{}", self.content));
        }
        out
    }
}
