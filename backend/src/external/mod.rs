//! External inventory snapshot providers
//!
//! Each provider answers a single parameterless call with the full current
//! inventory snapshot. Callers handle failures; providers never retry.

pub mod inventory_api;
pub mod mock_inventory;
pub mod pg_inventory;

use std::future::Future;

use shared::InventoryItem;

pub use inventory_api::InventoryApiClient;
pub use mock_inventory::MockInventorySource;
pub use pg_inventory::PgInventorySource;

use crate::config::{Config, SourceKind};
use crate::error::{AppError, AppResult};

/// Supplies inventory snapshots to the stock monitor
pub trait InventorySource: Send + Sync {
    /// Human readable name used in logs and health output
    fn name(&self) -> &'static str;

    /// Fetch the full current snapshot
    fn fetch_items(&self) -> impl Future<Output = AppResult<Vec<InventoryItem>>> + Send;
}

/// The provider selected by configuration
pub enum SnapshotSource {
    Mock(MockInventorySource),
    Http(InventoryApiClient),
    Postgres(PgInventorySource),
}

impl SnapshotSource {
    /// Build the configured provider
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        match config.source.kind {
            SourceKind::Mock => {
                let mut source = MockInventorySource::new(config.source.mock_latency_ms);
                if let Some(date) = config.source.mock_reference_date {
                    source = source.with_reference_date(date);
                }
                Ok(Self::Mock(source))
            }
            SourceKind::Http => {
                let base_url = config.source.api_base_url.clone().ok_or_else(|| {
                    AppError::Configuration("source.api_base_url is not set".to_string())
                })?;
                Ok(Self::Http(InventoryApiClient::new(base_url)))
            }
            SourceKind::Postgres => {
                let database = config.database.as_ref().ok_or_else(|| {
                    AppError::Configuration("database settings are not set".to_string())
                })?;
                let source =
                    PgInventorySource::connect(database, config.environment == "development")
                        .await?;
                Ok(Self::Postgres(source))
            }
        }
    }
}

impl InventorySource for SnapshotSource {
    fn name(&self) -> &'static str {
        match self {
            SnapshotSource::Mock(source) => source.name(),
            SnapshotSource::Http(source) => source.name(),
            SnapshotSource::Postgres(source) => source.name(),
        }
    }

    async fn fetch_items(&self) -> AppResult<Vec<InventoryItem>> {
        match self {
            SnapshotSource::Mock(source) => source.fetch_items().await,
            SnapshotSource::Http(source) => source.fetch_items().await,
            SnapshotSource::Postgres(source) => source.fetch_items().await,
        }
    }
}
