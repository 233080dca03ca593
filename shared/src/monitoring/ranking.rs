//! Display ordering of generated alerts

use crate::models::StockAlert;

/// Order alerts by severity, then soonest expiry first.
///
/// Within one severity, alerts carrying `days_until_expiry` are ordered by it
/// and take the positions expiry alerts already held; alerts without it
/// (stock-level alerts) keep their slots. Equal keys keep input order.
pub fn rank_alerts(mut alerts: Vec<StockAlert>) -> Vec<StockAlert> {
    alerts.sort_by_key(|alert| alert.severity.rank());

    let mut start = 0;
    while start < alerts.len() {
        let rank = alerts[start].severity.rank();
        let end = alerts[start..]
            .iter()
            .position(|alert| alert.severity.rank() != rank)
            .map_or(alerts.len(), |offset| start + offset);

        order_dated_slots(&mut alerts[start..end]);
        start = end;
    }

    alerts
}

/// Stable-sort the dated alerts of `group` among the slots they occupy
fn order_dated_slots(group: &mut [StockAlert]) {
    let slots: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, alert)| alert.days_until_expiry.is_some())
        .map(|(index, _)| index)
        .collect();

    if slots.len() < 2 {
        return;
    }

    let mut dated: Vec<StockAlert> = slots.iter().map(|&i| group[i].clone()).collect();
    dated.sort_by_key(|alert| alert.days_until_expiry);

    for (slot, alert) in slots.into_iter().zip(dated) {
        group[slot] = alert;
    }
}
