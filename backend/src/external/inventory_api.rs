//! Inventory API client
//!
//! Fetches the inventory snapshot from the ERP inventory service over HTTP.

use reqwest::Client;
use shared::InventoryItem;

use super::InventorySource;
use crate::error::{AppError, AppResult};

/// HTTP client for the inventory service
#[derive(Clone)]
pub struct InventoryApiClient {
    client: Client,
    base_url: String,
}

impl InventoryApiClient {
    /// Create a new InventoryApiClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/inventory/items", self.base_url)
    }
}

impl InventorySource for InventoryApiClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_items(&self) -> AppResult<Vec<InventoryItem>> {
        let url = self.items_url();
        tracing::debug!(%url, "Fetching inventory snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::InventoryService(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InventoryService(format!("{} - {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::InventoryService(format!("failed to parse snapshot: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url_strips_trailing_slash() {
        let client = InventoryApiClient::new("http://erp.local/api/".to_string());
        assert_eq!(client.items_url(), "http://erp.local/api/inventory/items");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_inventory_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = InventoryApiClient::new("http://127.0.0.1:9".to_string());
        let result = client.fetch_items().await;
        assert!(matches!(result, Err(AppError::InventoryService(_))));
    }
}
