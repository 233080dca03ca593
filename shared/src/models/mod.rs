//! Domain models for stock monitoring

mod alert;
mod inventory;
mod threshold;

pub use alert::*;
pub use inventory::*;
pub use threshold::*;
