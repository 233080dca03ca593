//! Shared types and stock monitoring engine for the LGU Health ERP
//!
//! This crate contains the inventory snapshot model and the pure alert
//! pipeline shared between the backend, the browser (via WASM), and tests.

pub mod export;
pub mod models;
pub mod monitoring;
pub mod types;
pub mod validation;

pub use export::*;
pub use models::*;
pub use monitoring::*;
pub use types::*;
pub use validation::*;
