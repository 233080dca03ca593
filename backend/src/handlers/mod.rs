//! HTTP request handlers

pub mod health;
pub mod stock_monitoring;

pub use health::*;
pub use stock_monitoring::*;
