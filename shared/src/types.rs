//! Common types used across the platform

use serde::{Deserialize, Serialize};

use crate::models::AlertType;

/// Tab selector of the stock monitoring view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTab {
    #[default]
    All,
    Expiring,
    Expired,
    LowStock,
}

impl AlertTab {
    /// Whether alerts of `alert_type` are listed under this tab
    pub fn includes(&self, alert_type: AlertType) -> bool {
        match self {
            AlertTab::All => true,
            AlertTab::Expiring => alert_type == AlertType::ExpiringSoon,
            AlertTab::Expired => alert_type == AlertType::Expired,
            AlertTab::LowStock => {
                matches!(alert_type, AlertType::LowStock | AlertType::CriticalLow)
            }
        }
    }
}

/// Search and tab parameters for listing alerts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tab: AlertTab,
}

impl AlertQuery {
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}
