use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::order::Order;

// ============================================================================
// Delivery History Log
// ============================================================================
//
// Append-only record of every order that passed through the system. The log
// shares ownership of the orders with whoever created them: entries are
// handles, not copies, so an assignment made through the creator's handle
// after registration shows up in the report. Entries are never removed and
// never deduplicated.
//
// ============================================================================

/// Shared handle to an order. The core is single-threaded by contract, so
/// shared mutability is `Rc<RefCell<_>>` rather than a lock.
pub type SharedOrder = Rc<RefCell<Order>>;

#[derive(Debug, Default)]
pub struct DeliveryLog {
    history: Vec<SharedOrder>,
}

impl DeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order to the history. The same order may be registered more
    /// than once; each registration is its own entry.
    pub fn register(&mut self, order: &SharedOrder) {
        tracing::debug!(order_id = order.borrow().id(), "order registered");
        self.history.push(Rc::clone(order));
    }

    /// Read-only view of the history in insertion order.
    pub fn history(&self) -> &[SharedOrder] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// One report line per registered order, in insertion order: kind label,
    /// zero-padded id, and the courier or the explicit `unassigned` marker.
    /// An empty log reports a single explicit placeholder line.
    pub fn report(&self) -> Vec<String> {
        if self.history.is_empty() {
            return vec!["- (no records)".to_string()];
        }

        self.history
            .iter()
            .map(|entry| {
                let order = entry.borrow();
                match order.courier() {
                    Some(courier) => format!(
                        "- {} #{:03} - delivered by {}",
                        order.kind().label(),
                        order.id(),
                        courier
                    ),
                    None => format!(
                        "- {} #{:03} - unassigned",
                        order.kind().label(),
                        order.id()
                    ),
                }
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
