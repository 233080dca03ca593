//! Inventory snapshot models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stocked item as delivered by the inventory snapshot provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[validate(length(min = 1, message = "Item code required"))]
    pub item_code: String,
    #[validate(length(min = 1, message = "Item name required"))]
    pub item_name: String,
    /// Current usable stock
    #[validate(range(min = 0, message = "Available quantity cannot be negative"))]
    pub available_quantity: i64,
    /// Stock at or below this level is considered low
    #[validate(range(min = 0, message = "Reorder level cannot be negative"))]
    pub reorder_level: i64,
    /// Display unit, e.g. "tablets"
    pub unit: String,
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl InventoryItem {
    pub fn is_out_of_stock(&self) -> bool {
        self.available_quantity == 0
    }

    /// At or below the reorder level (includes out of stock)
    pub fn is_low_stock(&self) -> bool {
        self.available_quantity <= self.reorder_level
    }
}

/// A lot of an item with its own expiry date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[validate(length(min = 1, message = "Batch id required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Batch number required"))]
    pub batch_number: String,
    #[validate(range(min = 0, message = "Batch quantity cannot be negative"))]
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl Batch {
    /// Signed whole days from `today` until expiry; negative once expired
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        crate::monitoring::days_between(self.expiry_date, today)
    }
}
