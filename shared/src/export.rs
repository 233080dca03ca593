//! CSV export of stock alerts

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::StockAlert;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Writer(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Flat row written for each alert
#[derive(Debug, Serialize)]
struct AlertRow<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    alert_type: &'static str,
    severity: &'static str,
    item_code: &'a str,
    item_name: &'a str,
    message: &'a str,
    recommended_action: &'a str,
    batch_number: Option<&'a str>,
    expiry_date: Option<NaiveDate>,
    current_quantity: Option<i64>,
    reorder_level: Option<i64>,
    days_until_expiry: Option<i64>,
}

impl<'a> From<&'a StockAlert> for AlertRow<'a> {
    fn from(alert: &'a StockAlert) -> Self {
        Self {
            id: &alert.id,
            alert_type: alert.alert_type.as_str(),
            severity: alert.severity.as_str(),
            item_code: &alert.item_code,
            item_name: &alert.item_name,
            message: &alert.message,
            recommended_action: &alert.recommended_action,
            batch_number: alert.batch.as_ref().map(|b| b.batch_number.as_str()),
            expiry_date: alert.batch.as_ref().map(|b| b.expiry_date),
            current_quantity: alert.current_quantity,
            reorder_level: alert.reorder_level,
            days_until_expiry: alert.days_until_expiry,
        }
    }
}

/// Render alerts as CSV with a header row; absent values are empty cells
pub fn alerts_to_csv<'a, I>(alerts: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a StockAlert>,
{
    let mut wtr = csv::Writer::from_writer(vec![]);
    let mut wrote_any = false;
    for alert in alerts {
        wtr.serialize(AlertRow::from(alert))?;
        wrote_any = true;
    }
    if !wrote_any {
        wtr.write_record(CSV_HEADER)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Writer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Column names, also written on their own for an empty export
pub const CSV_HEADER: [&str; 12] = [
    "id",
    "type",
    "severity",
    "item_code",
    "item_name",
    "message",
    "recommended_action",
    "batch_number",
    "expiry_date",
    "current_quantity",
    "reorder_level",
    "days_until_expiry",
];
