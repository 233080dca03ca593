//! Alert generation from an inventory snapshot

use chrono::NaiveDate;

use super::days_between;
use crate::models::{AlertSeverity, AlertThresholds, AlertType, Batch, InventoryItem, StockAlert};

pub const ACTION_URGENT_REORDER: &str = "Urgent reorder required";
pub const ACTION_REORDER_SOON: &str = "Consider reordering soon";
pub const ACTION_DISPOSE: &str = "Remove and dispose immediately";
pub const ACTION_PRIORITIZE: &str = "Prioritize dispensing or consider transfer to other LGU";
pub const ACTION_FEFO: &str = "Monitor usage rate and consider FEFO priority";
pub const ACTION_NORMAL: &str = "Normal monitoring";

/// Produce every alert implied by `items` as of `today`.
///
/// Per item: at most one stock-level alert, then one expiry alert for each
/// batch inside the notice horizon. The result is unranked.
pub fn generate_alerts(
    items: &[InventoryItem],
    thresholds: &AlertThresholds,
    today: NaiveDate,
) -> Vec<StockAlert> {
    let mut alerts = Vec::new();

    for item in items {
        if let Some(alert) = stock_level_alert(item, thresholds) {
            alerts.push(alert);
        }
        alerts.extend(
            item.batches
                .iter()
                .filter_map(|batch| expiry_alert(item, batch, thresholds, today)),
        );
    }

    alerts
}

/// Classify an item's stock level against its own reorder level
pub fn classify_stock_level(
    quantity: i64,
    reorder_level: i64,
    thresholds: &AlertThresholds,
) -> Option<(AlertType, AlertSeverity)> {
    if quantity > reorder_level {
        None
    } else if quantity == 0 {
        Some((AlertType::CriticalLow, AlertSeverity::High))
    } else if thresholds.is_severely_low(quantity, reorder_level) {
        Some((AlertType::LowStock, AlertSeverity::High))
    } else {
        Some((AlertType::LowStock, AlertSeverity::Medium))
    }
}

/// Classify a batch by signed days until expiry
pub fn classify_expiry(
    days_until_expiry: i64,
    thresholds: &AlertThresholds,
) -> Option<(AlertType, AlertSeverity)> {
    match days_until_expiry {
        d if d < 0 => Some((AlertType::Expired, AlertSeverity::High)),
        d if d <= thresholds.critical_days => Some((AlertType::ExpiringSoon, AlertSeverity::High)),
        d if d <= thresholds.warning_days => Some((AlertType::ExpiringSoon, AlertSeverity::Medium)),
        d if d <= thresholds.notice_days => Some((AlertType::ExpiringSoon, AlertSeverity::Low)),
        _ => None,
    }
}

fn stock_level_alert(item: &InventoryItem, thresholds: &AlertThresholds) -> Option<StockAlert> {
    let (alert_type, severity) =
        classify_stock_level(item.available_quantity, item.reorder_level, thresholds)?;

    let (message, action) = match alert_type {
        AlertType::CriticalLow => ("Out of stock".to_string(), ACTION_URGENT_REORDER),
        _ => (
            format!(
                "Low stock: {} {} remaining",
                item.available_quantity, item.unit
            ),
            ACTION_REORDER_SOON,
        ),
    };

    Some(StockAlert {
        id: format!("{}-{}", alert_type.id_prefix(), item.item_code),
        alert_type,
        severity,
        item_code: item.item_code.clone(),
        item_name: item.item_name.clone(),
        message,
        recommended_action: action.to_string(),
        batch: None,
        current_quantity: Some(item.available_quantity),
        reorder_level: Some(item.reorder_level),
        days_until_expiry: None,
    })
}

fn expiry_alert(
    item: &InventoryItem,
    batch: &Batch,
    thresholds: &AlertThresholds,
    today: NaiveDate,
) -> Option<StockAlert> {
    let days = days_between(batch.expiry_date, today);
    let (alert_type, severity) = classify_expiry(days, thresholds)?;

    let message = if alert_type == AlertType::Expired {
        format!("Batch {} expired {} days ago", batch.batch_number, days.abs())
    } else {
        format!("Batch {} expires in {} days", batch.batch_number, days)
    };

    let action = match (alert_type, severity) {
        (AlertType::Expired, _) => ACTION_DISPOSE,
        (_, AlertSeverity::High) => ACTION_PRIORITIZE,
        (_, AlertSeverity::Medium) => ACTION_FEFO,
        (_, AlertSeverity::Low) => ACTION_NORMAL,
    };

    Some(StockAlert {
        id: format!(
            "{}-{}-{}",
            alert_type.id_prefix(),
            item.item_code,
            batch.id
        ),
        alert_type,
        severity,
        item_code: item.item_code.clone(),
        item_name: item.item_name.clone(),
        message,
        recommended_action: action.to_string(),
        batch: Some(batch.clone()),
        current_quantity: None,
        reorder_level: None,
        days_until_expiry: Some(days),
    })
}
