//! Summary counts over a snapshot and its alerts

use std::collections::HashSet;

use crate::models::{AlertType, InventoryItem, StockAlert, StockStats};

/// Aggregate dashboard counts.
///
/// `expiring` and `expired` count distinct item codes, not alerts.
/// `healthy` is `total - low_stock - out_of_stock` and is not clamped:
/// out-of-stock items are also low stock, so it can go negative.
pub fn compute_stats(items: &[InventoryItem], alerts: &[StockAlert]) -> StockStats {
    let total = items.len() as i64;
    let low_stock = items.iter().filter(|item| item.is_low_stock()).count() as i64;
    let out_of_stock = items.iter().filter(|item| item.is_out_of_stock()).count() as i64;

    StockStats {
        total,
        low_stock,
        out_of_stock,
        expiring: distinct_items(alerts, AlertType::ExpiringSoon),
        expired: distinct_items(alerts, AlertType::Expired),
        healthy: total - low_stock - out_of_stock,
    }
}

fn distinct_items(alerts: &[StockAlert], alert_type: AlertType) -> i64 {
    alerts
        .iter()
        .filter(|alert| alert.alert_type == alert_type)
        .map(|alert| alert.item_code.as_str())
        .collect::<HashSet<_>>()
        .len() as i64
}
