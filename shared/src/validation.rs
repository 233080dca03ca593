//! Validation at the snapshot boundary
//!
//! The alert pipeline assumes well-formed input; everything it relies on is
//! checked here once, when a snapshot arrives from its provider.

use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::models::{AlertThresholds, InventoryItem};

/// Reasons a snapshot is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Invalid item {item_code}: {message}")]
    InvalidItem { item_code: String, message: String },

    #[error("Invalid batch {batch_id} of item {item_code}: {message}")]
    InvalidBatch {
        item_code: String,
        batch_id: String,
        message: String,
    },

    #[error("Duplicate item code: {0}")]
    DuplicateItemCode(String),

    #[error("Duplicate batch id {batch_id} in item {item_code}")]
    DuplicateBatchId { item_code: String, batch_id: String },
}

/// Validate every item and batch of a snapshot
pub fn validate_snapshot(items: &[InventoryItem]) -> Result<(), SnapshotError> {
    let mut item_codes = HashSet::new();

    for item in items {
        item.validate().map_err(|e| SnapshotError::InvalidItem {
            item_code: item.item_code.clone(),
            message: e.to_string(),
        })?;

        if !item_codes.insert(item.item_code.as_str()) {
            return Err(SnapshotError::DuplicateItemCode(item.item_code.clone()));
        }

        let mut batch_ids = HashSet::new();
        for batch in &item.batches {
            batch.validate().map_err(|e| SnapshotError::InvalidBatch {
                item_code: item.item_code.clone(),
                batch_id: batch.id.clone(),
                message: e.to_string(),
            })?;

            if !batch_ids.insert(batch.id.as_str()) {
                return Err(SnapshotError::DuplicateBatchId {
                    item_code: item.item_code.clone(),
                    batch_id: batch.id.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validate that expiry tiers ascend and the stock share is a percentage
pub fn validate_thresholds(thresholds: &AlertThresholds) -> Result<(), &'static str> {
    if thresholds.critical_days < 0 {
        return Err("Critical expiry days cannot be negative");
    }
    if thresholds.warning_days <= thresholds.critical_days {
        return Err("Warning expiry days must exceed critical expiry days");
    }
    if thresholds.notice_days <= thresholds.warning_days {
        return Err("Notice expiry days must exceed warning expiry days");
    }
    if !(0..=100).contains(&thresholds.high_severity_stock_percent) {
        return Err("High severity stock percent must be between 0 and 100");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Batch;
    use chrono::NaiveDate;

    fn batch(id: &str, quantity: i64) -> Batch {
        Batch {
            id: id.to_string(),
            batch_number: format!("LOT-{}", id),
            quantity,
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        }
    }

    fn item(code: &str) -> InventoryItem {
        InventoryItem {
            item_code: code.to_string(),
            item_name: "Oral Rehydration Salts".to_string(),
            available_quantity: 120,
            reorder_level: 50,
            unit: "sachets".to_string(),
            batches: vec![batch("1", 60), batch("2", 60)],
        }
    }

    #[test]
    fn test_valid_snapshot() {
        assert!(validate_snapshot(&[item("ORS1"), item("ORS2")]).is_ok());
        assert!(validate_snapshot(&[]).is_ok());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut bad = item("ORS1");
        bad.available_quantity = -1;
        assert!(matches!(
            validate_snapshot(&[bad]),
            Err(SnapshotError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_empty_item_code_rejected() {
        assert!(matches!(
            validate_snapshot(&[item("")]),
            Err(SnapshotError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_negative_batch_quantity_rejected() {
        let mut bad = item("ORS1");
        bad.batches.push(batch("3", -4));
        assert!(matches!(
            validate_snapshot(&[bad]),
            Err(SnapshotError::InvalidBatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_item_code_rejected() {
        assert_eq!(
            validate_snapshot(&[item("ORS1"), item("ORS1")]),
            Err(SnapshotError::DuplicateItemCode("ORS1".to_string()))
        );
    }

    #[test]
    fn test_batch_ids_only_unique_within_item() {
        let mut dup = item("ORS1");
        dup.batches.push(batch("1", 10));
        assert_eq!(
            validate_snapshot(&[dup]),
            Err(SnapshotError::DuplicateBatchId {
                item_code: "ORS1".to_string(),
                batch_id: "1".to_string(),
            })
        );
        // Same batch ids under different items are fine
        assert!(validate_snapshot(&[item("ORS1"), item("ORS2")]).is_ok());
    }

    #[test]
    fn test_thresholds() {
        assert!(validate_thresholds(&AlertThresholds::default()).is_ok());

        let mut t = AlertThresholds::default();
        t.warning_days = t.critical_days;
        assert!(validate_thresholds(&t).is_err());

        let mut t = AlertThresholds::default();
        t.high_severity_stock_percent = 120;
        assert!(validate_thresholds(&t).is_err());
    }
}
