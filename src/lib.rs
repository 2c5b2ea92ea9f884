// ============================================================================
// SpeedFast Dispatch Core
// ============================================================================
//
// Order lifecycle for the SpeedFast delivery service: validated construction,
// per-kind assignment rules and delivery-time formulas, the dispatch gate,
// and the append-only delivery history log.
//
// The binary in main.rs is a thin demo driver; everything with a behavioral
// contract lives here, reported through returned events rather than console
// output so any caller (driver, tests) can render it.
//
// ============================================================================

pub mod domain;
pub mod history;

pub use domain::order::{
    AssignmentMode, Courier, CourierRoster, DispatchBlock, DispatchOutcome, Order, OrderEvent,
    OrderKind, Precheck, ValidationError,
};
pub use history::{DeliveryLog, SharedOrder};
