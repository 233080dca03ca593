//! Search and tab filtering over ranked alerts

use crate::models::StockAlert;
use crate::types::AlertTab;

/// Alerts matching both the free-text `query` and the `tab`, in input order.
///
/// The query is a case-insensitive substring test against the item code,
/// item name, and message. An empty query matches everything.
pub fn filter_alerts<'a>(alerts: &'a [StockAlert], query: &str, tab: AlertTab) -> Vec<&'a StockAlert> {
    let needle = query.to_lowercase();
    alerts
        .iter()
        .filter(|alert| tab.includes(alert.alert_type))
        .filter(|alert| matches_search(alert, &needle))
        .collect()
}

fn matches_search(alert: &StockAlert, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&alert.item_code, &alert.item_name, &alert.message]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
