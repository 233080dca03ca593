//! Derived stock alert models

use serde::{Deserialize, Serialize};

use super::Batch;

/// Category of a stock alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    ExpiringSoon,
    LowStock,
    Expired,
    CriticalLow,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::ExpiringSoon => "expiring_soon",
            AlertType::LowStock => "low_stock",
            AlertType::Expired => "expired",
            AlertType::CriticalLow => "critical_low",
        }
    }

    /// Prefix used when composing alert ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AlertType::ExpiringSoon => "expiring",
            AlertType::LowStock => "low",
            AlertType::Expired => "expired",
            AlertType::CriticalLow => "critical",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::ExpiringSoon => write!(f, "Expiring Soon"),
            AlertType::LowStock => write!(f, "Low Stock"),
            AlertType::Expired => write!(f, "Expired"),
            AlertType::CriticalLow => write!(f, "Critical Low"),
        }
    }
}

/// Alert severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    /// Sort rank: high = 0, medium = 1, low = 2
    pub fn rank(&self) -> u8 {
        match self {
            AlertSeverity::High => 0,
            AlertSeverity::Medium => 1,
            AlertSeverity::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::High => "high",
            AlertSeverity::Medium => "medium",
            AlertSeverity::Low => "low",
        }
    }
}

/// A stock alert derived from one snapshot refresh.
///
/// Alerts are rebuilt in full on every refresh and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    /// Stable id derived from the alert type and its source item/batch
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub item_code: String,
    pub item_name: String,
    pub message: String,
    pub recommended_action: String,
    /// Source batch, expiry alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
    /// Stock-level alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_quantity: Option<i64>,
    /// Stock-level alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
    /// Negative when already expired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
}

impl StockAlert {
    pub fn is_expiry_alert(&self) -> bool {
        matches!(self.alert_type, AlertType::ExpiringSoon | AlertType::Expired)
    }
}

/// Summary counts for the monitoring dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStats {
    pub total: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
    /// Distinct items with at least one expiring batch
    pub expiring: i64,
    /// Distinct items with at least one expired batch
    pub expired: i64,
    /// `total - low_stock - out_of_stock`, not clamped
    pub healthy: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        assert!(AlertSeverity::High.rank() < AlertSeverity::Medium.rank());
        assert!(AlertSeverity::Medium.rank() < AlertSeverity::Low.rank());
    }

    #[test]
    fn test_alert_type_serializes_snake_case() {
        let json = serde_json::to_string(&AlertType::CriticalLow).unwrap();
        assert_eq!(json, "\"critical_low\"");
        let parsed: AlertType = serde_json::from_str("\"expiring_soon\"").unwrap();
        assert_eq!(parsed, AlertType::ExpiringSoon);
    }

    #[test]
    fn test_stock_alert_omits_absent_fields() {
        let alert = StockAlert {
            id: "critical-MED1".to_string(),
            alert_type: AlertType::CriticalLow,
            severity: AlertSeverity::High,
            item_code: "MED1".to_string(),
            item_name: "Paracetamol 500mg".to_string(),
            message: "Out of stock".to_string(),
            recommended_action: "Urgent reorder required".to_string(),
            batch: None,
            current_quantity: Some(0),
            reorder_level: Some(10),
            days_until_expiry: None,
        };

        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["type"], "critical_low");
        assert_eq!(value["currentQuantity"], 0);
        assert!(value.get("batch").is_none());
        assert!(value.get("daysUntilExpiry").is_none());
    }
}
