//! Business logic services for the stock monitoring backend

pub mod stock_monitoring;

pub use stock_monitoring::StockMonitoringService;
