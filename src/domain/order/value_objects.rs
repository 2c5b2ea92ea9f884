use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Closed set of order kinds handled by the dispatch service.
///
/// Each kind carries its own delivery-time formula and automatic assignment
/// rule (see `rules.rs`); the set is fixed and exhaustive, so everything
/// downstream is plain pattern dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    Food,
    Parcel,
    Express,
}

impl OrderKind {
    /// Label used in summaries and history report lines.
    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Food => "FoodOrder",
            OrderKind::Parcel => "ParcelOrder",
            OrderKind::Express => "ExpressOrder",
        }
    }

    /// The pre-check this kind runs before committing a courier.
    /// Express orders skip straight to the priority courier.
    pub fn precheck(&self) -> Option<Precheck> {
        match self {
            OrderKind::Food => Some(Precheck::ThermalBag),
            OrderKind::Parcel => Some(Precheck::WeightAndPackaging),
            OrderKind::Express => None,
        }
    }
}

/// Deterministic assignment pre-checks. No external resource is modeled,
/// so a pre-check always passes; what matters is that it ran and was
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precheck {
    ThermalBag,
    WeightAndPackaging,
}

impl Precheck {
    pub fn description(&self) -> &'static str {
        match self {
            Precheck::ThermalBag => "thermal bag availability",
            Precheck::WeightAndPackaging => "weight and packaging",
        }
    }
}

/// Courier name, non-blank and trimmed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier(String);

impl Courier {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankCourierName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Courier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a courier ended up on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentMode {
    Automatic,
    Manual,
}

/// Result of the dispatch gate.
///
/// A blocked dispatch is an expected state, not an error: the gate reports
/// the reason and leaves the order untouched. "Dispatched" is never stored
/// on the order; it is evaluated live on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Dispatched,
    Blocked(DispatchBlock),
}

/// Why the dispatch gate refused an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchBlock {
    Cancelled,
    NoCourier,
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Dispatched => f.write_str("Order dispatched"),
            DispatchOutcome::Blocked(DispatchBlock::Cancelled) => {
                f.write_str("Cannot dispatch: the order is cancelled")
            }
            DispatchOutcome::Blocked(DispatchBlock::NoCourier) => {
                f.write_str("Cannot dispatch: no courier assigned")
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(OrderKind::Food.label(), "FoodOrder");
        assert_eq!(OrderKind::Parcel.label(), "ParcelOrder");
        assert_eq!(OrderKind::Express.label(), "ExpressOrder");
    }

    #[test]
    fn test_kind_prechecks() {
        assert_eq!(OrderKind::Food.precheck(), Some(Precheck::ThermalBag));
        assert_eq!(
            OrderKind::Parcel.precheck(),
            Some(Precheck::WeightAndPackaging)
        );
        assert_eq!(OrderKind::Express.precheck(), None);
    }

    #[test]
    fn test_courier_parse_trims() {
        let courier = Courier::parse("  Pedro Morales  ").unwrap();
        assert_eq!(courier.as_str(), "Pedro Morales");
    }

    #[test]
    fn test_courier_parse_rejects_blank() {
        assert!(matches!(
            Courier::parse(""),
            Err(ValidationError::BlankCourierName)
        ));
        assert!(matches!(
            Courier::parse("   "),
            Err(ValidationError::BlankCourierName)
        ));
    }

    #[test]
    fn test_dispatch_outcome_messages() {
        assert!(DispatchOutcome::Dispatched.is_dispatched());
        assert!(!DispatchOutcome::Blocked(DispatchBlock::NoCourier).is_dispatched());
        assert_eq!(
            DispatchOutcome::Blocked(DispatchBlock::Cancelled).to_string(),
            "Cannot dispatch: the order is cancelled"
        );
    }
}
