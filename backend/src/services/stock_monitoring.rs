//! Stock monitoring service
//!
//! Thin stateful shell around the pure alert pipeline in `shared::monitoring`.
//! It owns the only mutable state (last snapshot, ranked alerts, stats) and
//! replaces all of it in a single write per refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::{
    alerts_to_csv, evaluate, filter_alerts, validate_snapshot, AlertQuery, AlertThresholds,
    InventoryItem, MonitoringReport, StockAlert, StockStats,
};
use tokio::sync::{Mutex, RwLock};

use crate::error::AppResult;
use crate::external::InventorySource;

/// Stock monitoring service
pub struct StockMonitoringService<S> {
    source: Arc<S>,
    thresholds: AlertThresholds,
    state: Arc<RwLock<MonitorState>>,
    loading: Arc<AtomicBool>,
    refresh_lock: Arc<Mutex<()>>,
}

impl<S> Clone for StockMonitoringService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            thresholds: self.thresholds,
            state: Arc::clone(&self.state),
            loading: Arc::clone(&self.loading),
            refresh_lock: Arc::clone(&self.refresh_lock),
        }
    }
}

/// Everything derived from the last snapshot
#[derive(Debug, Clone, Default)]
struct MonitorState {
    items: Vec<InventoryItem>,
    report: MonitoringReport,
    as_of: Option<NaiveDate>,
    last_refreshed_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

/// Result of one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// New snapshot loaded and evaluated
    Refreshed { stats: StockStats, alert_count: usize },
    /// Snapshot unavailable; alerts and stats were cleared
    Degraded { reason: String },
}

/// Stats plus refresh bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct MonitorStatus {
    pub stats: StockStats,
    pub item_count: usize,
    pub loading: bool,
    pub as_of: Option<NaiveDate>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

impl<S: InventorySource> StockMonitoringService<S> {
    /// Create a new StockMonitoringService with empty state
    pub fn new(source: S, thresholds: AlertThresholds) -> Self {
        Self {
            source: Arc::new(source),
            thresholds,
            state: Arc::new(RwLock::new(MonitorState::default())),
            loading: Arc::new(AtomicBool::new(false)),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch a fresh snapshot and rebuild all derived state as of `today`.
    ///
    /// A failed fetch or an invalid snapshot is logged and leaves the state
    /// empty rather than partially populated. The loading flag is cleared
    /// even when the returned future is dropped before completion.
    pub async fn refresh(&self, today: NaiveDate) -> RefreshOutcome {
        let _guard = self.refresh_lock.lock().await;
        let _loading = LoadingFlag::raise(&self.loading);

        let loaded = self.load(today).await;

        let mut state = self.state.write().await;
        match loaded {
            Ok((items, report)) => {
                let outcome = RefreshOutcome::Refreshed {
                    stats: report.stats,
                    alert_count: report.alerts.len(),
                };
                tracing::info!(
                    source = self.source.name(),
                    items = items.len(),
                    alerts = report.alerts.len(),
                    %today,
                    "Stock monitoring refreshed"
                );
                *state = MonitorState {
                    items,
                    report,
                    as_of: Some(today),
                    last_refreshed_at: Some(Utc::now()),
                    last_error: None,
                };
                outcome
            }
            Err(e) => {
                tracing::error!(source = self.source.name(), error = %e, "Failed to load inventory snapshot");
                let reason = e.to_string();
                *state = MonitorState {
                    last_refreshed_at: Some(Utc::now()),
                    last_error: Some(reason.clone()),
                    ..MonitorState::default()
                };
                RefreshOutcome::Degraded { reason }
            }
        }
    }

    async fn load(&self, today: NaiveDate) -> AppResult<(Vec<InventoryItem>, MonitoringReport)> {
        let items = self.source.fetch_items().await?;
        validate_snapshot(&items)?;
        let report = evaluate(&items, &self.thresholds, today);
        Ok((items, report))
    }

    /// Ranked alerts matching the search text and tab
    pub async fn alerts(&self, query: &AlertQuery) -> Vec<StockAlert> {
        let state = self.state.read().await;
        filter_alerts(&state.report.alerts, query.search(), query.tab)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn status(&self) -> MonitorStatus {
        let state = self.state.read().await;
        MonitorStatus {
            stats: state.report.stats,
            item_count: state.items.len(),
            loading: self.loading.load(Ordering::SeqCst),
            as_of: state.as_of,
            last_refreshed_at: state.last_refreshed_at,
            last_error: state.last_error.clone(),
        }
    }

    /// CSV of the alerts matching the search text and tab
    pub async fn export_csv(&self, query: &AlertQuery) -> AppResult<String> {
        let state = self.state.read().await;
        let alerts = filter_alerts(&state.report.alerts, query.search(), query.tab);
        Ok(alerts_to_csv(alerts)?)
    }
}

/// Holds the loading flag up until dropped
struct LoadingFlag<'a>(&'a AtomicBool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
