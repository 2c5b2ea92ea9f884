use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{AssignmentMode, Courier, OrderKind, Precheck};

// ============================================================================
// Order Events - Structured Lifecycle Emission
// ============================================================================
//
// Lifecycle operations return these instead of printing. The demo driver
// renders them to the console through their Display impls; tests assert on
// them directly, so the core stays observable without capturing stdout.
//
// ============================================================================

/// Order Event - union type for everything the lifecycle reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    PrecheckPassed(PrecheckPassed),
    CourierAssigned(CourierAssigned),
    Cancelled(OrderCancelled),
}

impl OrderEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::PrecheckPassed(_) => "PrecheckPassed",
            OrderEvent::CourierAssigned(_) => "CourierAssigned",
            OrderEvent::Cancelled(_) => "OrderCancelled",
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderEvent::PrecheckPassed(e) => {
                write!(f, "Checking {}... OK", e.check.description())
            }
            OrderEvent::CourierAssigned(e) => {
                write!(f, "Order #{:03} assigned to {}", e.order_id, e.courier)
            }
            OrderEvent::Cancelled(e) => write!(f, "Order #{:03} cancelled", e.order_id),
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// A kind-specific pre-check ran and passed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrecheckPassed {
    pub order_id: i64,
    pub kind: OrderKind,
    pub check: Precheck,
}

/// A courier was committed to the order, overwriting any previous one.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CourierAssigned {
    pub order_id: i64,
    pub courier: Courier,
    pub mode: AssignmentMode,
    pub assigned_at: DateTime<Utc>,
}

/// The order was cancelled. Emitted on every call, including repeats.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderCancelled {
    pub order_id: i64,
    pub cancelled_at: DateTime<Utc>,
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event(event: &OrderEvent) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn deserialize_event(json: &str) -> Result<OrderEvent> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        let event = OrderEvent::PrecheckPassed(PrecheckPassed {
            order_id: 7,
            kind: OrderKind::Food,
            check: Precheck::ThermalBag,
        });
        assert_eq!(event.event_type(), "PrecheckPassed");

        let event = OrderEvent::Cancelled(OrderCancelled {
            order_id: 7,
            cancelled_at: Utc::now(),
        });
        assert_eq!(event.event_type(), "OrderCancelled");
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = OrderEvent::CourierAssigned(CourierAssigned {
            order_id: 42,
            courier: Courier::parse("Ana Reyes").unwrap(),
            mode: AssignmentMode::Manual,
            assigned_at: Utc::now(),
        });

        let json = serialize_event(&event).unwrap();
        assert!(json.contains("\"type\":\"CourierAssigned\""));

        match deserialize_event(&json).unwrap() {
            OrderEvent::CourierAssigned(e) => {
                assert_eq!(e.order_id, 42);
                assert_eq!(e.courier.as_str(), "Ana Reyes");
                assert_eq!(e.mode, AssignmentMode::Manual);
            }
            other => panic!("Unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_event_display() {
        let event = OrderEvent::PrecheckPassed(PrecheckPassed {
            order_id: 1,
            kind: OrderKind::Parcel,
            check: Precheck::WeightAndPackaging,
        });
        assert_eq!(event.to_string(), "Checking weight and packaging... OK");

        let event = OrderEvent::CourierAssigned(CourierAssigned {
            order_id: 5,
            courier: Courier::parse("Pedro Morales").unwrap(),
            mode: AssignmentMode::Automatic,
            assigned_at: Utc::now(),
        });
        assert_eq!(event.to_string(), "Order #005 assigned to Pedro Morales");
    }
}
