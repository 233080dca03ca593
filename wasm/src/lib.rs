//! WebAssembly module for the LGU Health ERP stock monitoring page
//!
//! Provides client-side computation for:
//! - Stock alert generation and ranking
//! - Summary stats
//! - Search/tab filtering
//! - CSV export of the alert table

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::monitoring::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("stock monitoring module loaded"));
}

/// Run the alert pipeline over a JSON snapshot.
///
/// `today` is `YYYY-MM-DD`; an empty string uses the browser's local date.
/// Returns the ranked alerts and stats as JSON.
#[wasm_bindgen]
pub fn generate_stock_report(items_json: &str, today: &str) -> Result<String, JsValue> {
    let items: Vec<InventoryItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inventory JSON: {}", e)))?;

    if let Err(e) = validate_snapshot(&items) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        return Err(JsValue::from_str(&e.to_string()));
    }

    let today = parse_today(today)?;
    let report = evaluate(&items, &AlertThresholds::default(), today);

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Filter ranked alerts (JSON) by search text and tab
#[wasm_bindgen]
pub fn filter_stock_alerts(alerts_json: &str, query: &str, tab: &str) -> Result<String, JsValue> {
    let alerts: Vec<StockAlert> = serde_json::from_str(alerts_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid alerts JSON: {}", e)))?;
    let tab = parse_tab(tab)?;

    let filtered = filter_alerts(&alerts, query, tab);
    serde_json::to_string(&filtered)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize alerts: {}", e)))
}

/// Render alerts (JSON) as CSV for download
#[wasm_bindgen]
pub fn export_stock_alerts_csv(alerts_json: &str) -> Result<String, JsValue> {
    let alerts: Vec<StockAlert> = serde_json::from_str(alerts_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid alerts JSON: {}", e)))?;
    shared::alerts_to_csv(&alerts).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Severity of a batch expiring in `days`, or "none"
#[wasm_bindgen]
pub fn expiry_severity(days: i32) -> String {
    classify_expiry(i64::from(days), &AlertThresholds::default())
        .map(|(_, severity)| severity.as_str().to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Severity of a stock-level alert, or "none" when stock is above the reorder level
#[wasm_bindgen]
pub fn stock_level_severity(available_quantity: i32, reorder_level: i32) -> String {
    classify_stock_level(
        i64::from(available_quantity),
        i64::from(reorder_level),
        &AlertThresholds::default(),
    )
    .map(|(_, severity)| severity.as_str().to_string())
    .unwrap_or_else(|| "none".to_string())
}

fn parse_today(today: &str) -> Result<NaiveDate, JsValue> {
    if today.is_empty() {
        let now = js_sys::Date::new_0();
        return NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .ok_or_else(|| JsValue::from_str("Invalid browser date"));
    }
    NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", today, e)))
}

fn parse_tab(tab: &str) -> Result<AlertTab, JsValue> {
    match tab {
        "" | "all" => Ok(AlertTab::All),
        "expiring" => Ok(AlertTab::Expiring),
        "expired" => Ok(AlertTab::Expired),
        "low_stock" => Ok(AlertTab::LowStock),
        other => Err(JsValue::from_str(&format!("Unknown tab: {}", other))),
    }
}
