// ============================================================================
// Delivery History - Append-Only Order Record
// ============================================================================

pub mod log;

pub use log::{DeliveryLog, SharedOrder};
