//! PostgreSQL-backed inventory source

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use shared::{Batch, InventoryItem};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use super::InventorySource;
use crate::config::DatabaseConfig;
use crate::error::AppResult;

/// Must run before any other statement of the transaction
const SNAPSHOT_ISOLATION: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY";

const ITEMS_QUERY: &str = r#"
    SELECT item_code, item_name, available_quantity, reorder_level, unit
    FROM inventory_items
    ORDER BY item_code
"#;

const BATCHES_QUERY: &str = r#"
    SELECT id, item_code, batch_number, quantity, expiry_date
    FROM inventory_batches
    ORDER BY item_code, expiry_date, batch_number
"#;

/// Reads the snapshot from the `inventory_items` and `inventory_batches` tables
#[derive(Clone)]
pub struct PgInventorySource {
    db: PgPool,
}

/// Row for item query
#[derive(Debug, FromRow)]
struct ItemRow {
    item_code: String,
    item_name: String,
    available_quantity: i64,
    reorder_level: i64,
    unit: String,
}

/// Row for batch query
#[derive(Debug, FromRow)]
struct BatchRow {
    id: Uuid,
    item_code: String,
    batch_number: String,
    quantity: i64,
    expiry_date: NaiveDate,
}

impl PgInventorySource {
    /// Create a new PgInventorySource over an existing pool
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Connect a pool, running migrations when `migrate` is set
    pub async fn connect(config: &DatabaseConfig, migrate: bool) -> AppResult<Self> {
        tracing::info!("Connecting to database...");
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.url)
            .await?;
        tracing::info!("Database connection established");

        if migrate {
            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&db)
                .await
                .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
            tracing::info!("Migrations completed");
        }

        Ok(Self::new(db))
    }
}

impl InventorySource for PgInventorySource {
    fn name(&self) -> &'static str {
        "postgres"
    }

    /// Both reads share one repeatable-read transaction so items and
    /// batches come from the same point in time.
    async fn fetch_items(&self) -> AppResult<Vec<InventoryItem>> {
        let mut tx = self.db.begin().await?;
        sqlx::query(SNAPSHOT_ISOLATION).execute(&mut *tx).await?;

        let items = sqlx::query_as::<_, ItemRow>(ITEMS_QUERY)
            .fetch_all(&mut *tx)
            .await?;
        let batches = sqlx::query_as::<_, BatchRow>(BATCHES_QUERY)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(assemble_snapshot(items, batches))
    }
}

/// Attach batches to their items, keeping query order within each item
fn assemble_snapshot(items: Vec<ItemRow>, batches: Vec<BatchRow>) -> Vec<InventoryItem> {
    let mut by_item: HashMap<String, Vec<Batch>> = HashMap::new();
    for row in batches {
        by_item.entry(row.item_code).or_default().push(Batch {
            id: row.id.to_string(),
            batch_number: row.batch_number,
            quantity: row.quantity,
            expiry_date: row.expiry_date,
        });
    }

    items
        .into_iter()
        .map(|row| InventoryItem {
            batches: by_item.remove(&row.item_code).unwrap_or_default(),
            item_code: row.item_code,
            item_name: row.item_name,
            available_quantity: row.available_quantity,
            reorder_level: row.reorder_level,
            unit: row.unit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_row(code: &str) -> ItemRow {
        ItemRow {
            item_code: code.to_string(),
            item_name: format!("{} name", code),
            available_quantity: 10,
            reorder_level: 5,
            unit: "vials".to_string(),
        }
    }

    fn batch_row(code: &str, number: &str, day: u32) -> BatchRow {
        BatchRow {
            id: Uuid::new_v4(),
            item_code: code.to_string(),
            batch_number: number.to_string(),
            quantity: 1,
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        }
    }

    #[test]
    fn test_assemble_groups_batches_by_item() {
        let items = vec![item_row("A"), item_row("B"), item_row("C")];
        let batches = vec![
            batch_row("A", "A1", 1),
            batch_row("A", "A2", 2),
            batch_row("C", "C1", 3),
        ];

        let snapshot = assemble_snapshot(items, batches);
        assert_eq!(snapshot.len(), 3);
        let numbers: Vec<&str> = snapshot[0]
            .batches
            .iter()
            .map(|b| b.batch_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["A1", "A2"]);
        assert!(snapshot[1].batches.is_empty());
        assert_eq!(snapshot[2].batches.len(), 1);
    }

    #[test]
    fn test_orphan_batches_are_dropped() {
        let snapshot = assemble_snapshot(vec![item_row("A")], vec![batch_row("Z", "Z1", 1)]);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].batches.is_empty());
    }

    #[test]
    fn test_snapshot_reads_share_one_isolation_level() {
        assert!(SNAPSHOT_ISOLATION.starts_with("SET TRANSACTION"));
        assert!(SNAPSHOT_ISOLATION.contains("REPEATABLE READ"));
        assert!(ITEMS_QUERY.contains("FROM inventory_items"));
        assert!(BATCHES_QUERY.contains("FROM inventory_batches"));
    }

    /// Needs a scratch database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_fetch_items_from_database() {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL not set");
        let config = DatabaseConfig {
            url,
            max_connections: 2,
            min_connections: 1,
        };
        let source = PgInventorySource::connect(&config, true).await.unwrap();

        sqlx::query("DELETE FROM inventory_items WHERE item_code = 'TEST-PG-001'")
            .execute(&source.db)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO inventory_items (item_code, item_name, available_quantity, reorder_level, unit)
             VALUES ('TEST-PG-001', 'Test Syrup', 4, 10, 'bottles')",
        )
        .execute(&source.db)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO inventory_batches (item_code, batch_number, quantity, expiry_date)
             VALUES ('TEST-PG-001', 'TS-2', 2, '2030-02-01'), ('TEST-PG-001', 'TS-1', 2, '2030-01-01')",
        )
        .execute(&source.db)
        .await
        .unwrap();

        let snapshot = source.fetch_items().await.unwrap();
        let item = snapshot
            .iter()
            .find(|item| item.item_code == "TEST-PG-001")
            .unwrap();
        let numbers: Vec<&str> = item.batches.iter().map(|b| b.batch_number.as_str()).collect();
        assert_eq!(numbers, vec!["TS-1", "TS-2"]);

        sqlx::query("DELETE FROM inventory_items WHERE item_code = 'TEST-PG-001'")
            .execute(&source.db)
            .await
            .unwrap();
    }
}
