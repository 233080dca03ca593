//! Alert threshold configuration

use serde::{Deserialize, Serialize};

/// Days-until-expiry at or below which a batch is a high severity alert
pub const CRITICAL_EXPIRY_DAYS: i64 = 90;
/// Upper bound of the medium severity expiry tier
pub const WARNING_EXPIRY_DAYS: i64 = 180;
/// Upper bound of the low severity expiry tier; later expiries raise no alert
pub const NOTICE_EXPIRY_DAYS: i64 = 360;
/// Stock at or below this share of the reorder level is high severity
pub const HIGH_SEVERITY_STOCK_PERCENT: i64 = 50;

/// Named boundaries used by the alert generator.
///
/// Each expiry tier is inclusive on its upper bound, so a batch exactly on a
/// boundary falls into the more severe tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub critical_days: i64,
    pub warning_days: i64,
    pub notice_days: i64,
    pub high_severity_stock_percent: i64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical_days: CRITICAL_EXPIRY_DAYS,
            warning_days: WARNING_EXPIRY_DAYS,
            notice_days: NOTICE_EXPIRY_DAYS,
            high_severity_stock_percent: HIGH_SEVERITY_STOCK_PERCENT,
        }
    }
}

impl AlertThresholds {
    /// True when `quantity` is at or below the high severity share of `reorder_level`
    pub fn is_severely_low(&self, quantity: i64, reorder_level: i64) -> bool {
        i128::from(quantity) * 100
            <= i128::from(reorder_level) * i128::from(self.high_severity_stock_percent)
    }
}
