//! Stock monitoring pipeline
//!
//! snapshot -> [`generate_alerts`] -> [`rank_alerts`] -> [`compute_stats`]
//!
//! Every step is a pure function of its inputs; the caller owns any state.

mod filter;
mod generator;
mod ranking;
mod stats;

pub use filter::*;
pub use generator::*;
pub use ranking::*;
pub use stats::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AlertThresholds, InventoryItem, StockAlert, StockStats};

/// Signed whole calendar days from `today` to `date`
pub fn days_between(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Output of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringReport {
    /// Ranked alerts
    pub alerts: Vec<StockAlert>,
    pub stats: StockStats,
}

/// Run the full pipeline over a snapshot
pub fn evaluate(
    items: &[InventoryItem],
    thresholds: &AlertThresholds,
    today: NaiveDate,
) -> MonitoringReport {
    let alerts = rank_alerts(generate_alerts(items, thresholds, today));
    let stats = compute_stats(items, &alerts);
    MonitoringReport { alerts, stats }
}
