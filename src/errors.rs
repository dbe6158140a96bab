use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No record found: {0}")]
    NotFound(String),

    #[error("HTTP status {0}: {1}")]
    Http(u16, String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ViewError>;

// 用于从字符串创建错误
impl From<String> for ViewError {
    fn from(s: String) -> Self {
        ViewError::Unknown(s)
    }
}

impl From<&str> for ViewError {
    fn from(s: &str) -> Self {
        ViewError::Unknown(s.to_string())
    }
}
