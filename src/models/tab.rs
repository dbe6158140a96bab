use std::fmt;
use std::str::FromStr;

use crate::errors::ViewError;

/// 三个标签页，任意时刻只有一个处于激活状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Outlook,
    Summary,
    History,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Outlook, ActiveTab::Summary, ActiveTab::History];

    /// Tab identifier as carried by the tab buttons.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Outlook => "outlook",
            ActiveTab::Summary => "summary",
            ActiveTab::History => "history",
        }
    }

    /// History 不依赖已加载的行情数据
    pub fn needs_record(&self) -> bool {
        !matches!(self, ActiveTab::History)
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outlook" => Ok(ActiveTab::Outlook),
            "summary" => Ok(ActiveTab::Summary),
            "history" => Ok(ActiveTab::History),
            other => Err(ViewError::UnknownTab(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("Summary".parse::<ActiveTab>().unwrap(), ActiveTab::Summary);
        assert_eq!(" history ".parse::<ActiveTab>().unwrap(), ActiveTab::History);
        for tab in ActiveTab::ALL {
            assert_eq!(tab.as_str().parse::<ActiveTab>().unwrap(), tab);
        }
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "charts".parse::<ActiveTab>().unwrap_err();
        assert!(matches!(err, ViewError::UnknownTab(ref name) if name == "charts"));
    }

    #[test]
    fn only_history_works_without_record() {
        assert!(ActiveTab::Outlook.needs_record());
        assert!(ActiveTab::Summary.needs_record());
        assert!(!ActiveTab::History.needs_record());
    }
}
