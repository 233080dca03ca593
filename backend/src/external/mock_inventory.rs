//! Mock inventory source with simulated API latency
//!
//! Serves a fixed municipal health-office stock list whose expiry dates are
//! relative to the reference date, so the demo always shows every alert tier.

use std::time::Duration;

use chrono::{Days, NaiveDate, Utc};
use shared::{Batch, InventoryItem};

use super::InventorySource;
use crate::error::AppResult;

/// In-memory demo snapshot
#[derive(Debug, Clone)]
pub struct MockInventorySource {
    latency: Duration,
    reference_date: Option<NaiveDate>,
}

/// (item code, name, available, reorder level, unit, batches as (batch number, quantity, days from today))
type SeedItem = (
    &'static str,
    &'static str,
    i64,
    i64,
    &'static str,
    &'static [(&'static str, i64, i64)],
);

const SEED: &[SeedItem] = &[
    ("MED-001", "Paracetamol 500mg", 2400, 1000, "tablets", &[("PCM-2401", 1200, 420), ("PCM-2402", 1200, 540)]),
    ("MED-002", "Amoxicillin 500mg", 380, 500, "capsules", &[("AMX-2311", 380, 75)]),
    ("MED-003", "Oral Rehydration Salts", 0, 200, "sachets", &[("ORS-2305", 40, -12)]),
    ("MED-004", "Ferrous Sulfate + Folic Acid", 150, 400, "tablets", &[("FSF-2402", 150, 150)]),
    ("MED-005", "Losartan 50mg", 900, 600, "tablets", &[("LOS-2309", 300, 30), ("LOS-2403", 600, 300)]),
    ("MED-006", "Metformin 500mg", 1500, 800, "tablets", &[("MET-2404", 1500, 700)]),
    ("MED-007", "Cotrimoxazole Suspension", 60, 60, "bottles", &[("CTX-2310", 20, -3), ("CTX-2402", 40, 95)]),
    ("VAC-001", "BCG Vaccine", 45, 30, "vials", &[("BCG-2404", 45, 200)]),
    ("VAC-002", "Measles-Rubella Vaccine", 12, 40, "vials", &[("MR-2403", 12, 90)]),
    ("VAC-003", "Tetanus Toxoid", 80, 50, "vials", &[("TT-2312", 30, 0), ("TT-2404", 50, 181)]),
    ("SUP-001", "Disposable Syringe 1ml", 5000, 2000, "pieces", &[]),
    ("SUP-002", "Surgical Gloves", 300, 500, "pairs", &[("GLV-2401", 300, 365)]),
];

impl MockInventorySource {
    /// Create a mock source that answers after `latency_ms`
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            reference_date: None,
        }
    }

    /// Pin expiry dates to `date` instead of the current UTC date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Build the snapshot as of `today`
    pub fn snapshot(today: NaiveDate) -> Vec<InventoryItem> {
        SEED.iter()
            .map(|(code, name, available, reorder, unit, batches)| InventoryItem {
                item_code: code.to_string(),
                item_name: name.to_string(),
                available_quantity: *available,
                reorder_level: *reorder,
                unit: unit.to_string(),
                batches: batches
                    .iter()
                    .map(|(number, quantity, days)| Batch {
                        id: format!("{}-{}", code, number),
                        batch_number: number.to_string(),
                        quantity: *quantity,
                        expiry_date: offset(today, *days),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        today.checked_sub_days(magnitude)
    } else {
        today.checked_add_days(magnitude)
    };
    shifted.unwrap_or(today)
}

impl InventorySource for MockInventorySource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_items(&self) -> AppResult<Vec<InventoryItem>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let today = self
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());
        Ok(Self::snapshot(today))
    }
}
