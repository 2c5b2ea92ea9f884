use serde::{Deserialize, Serialize};

use super::value_objects::OrderKind;

// ============================================================================
// Per-Kind Dispatch Rules
// ============================================================================
//
// Delivery-time formulas and automatic courier selection. Every rule is a
// pure function of the order's own fields plus the roster configuration;
// there is no external data source behind courier selection.
//
// ============================================================================

impl OrderKind {
    /// Estimated delivery time in whole minutes for a trip of `distance_km`.
    ///
    /// - Food: 15 minutes of preparation plus 2 min/km, truncated.
    /// - Parcel: `floor(20 + 1.5 × km)`.
    /// - Express: 10 minutes flat, plus 5 beyond the 5 km threshold.
    ///   Exactly 5.0 km stays at 10.
    ///
    /// Monotonic non-decreasing in distance for every kind.
    pub fn estimated_minutes(&self, distance_km: f64) -> u32 {
        match self {
            OrderKind::Food => 15 + (2.0 * distance_km).floor() as u32,
            OrderKind::Parcel => (20.0 + 1.5 * distance_km).floor() as u32,
            OrderKind::Express => {
                if distance_km > 5.0 {
                    15
                } else {
                    10
                }
            }
        }
    }
}

/// Courier each kind's automatic assignment rule commits.
///
/// The automatic path always assigns; this roster is what makes the selection
/// deterministic and configurable instead of a literal at the assignment
/// site. The express entry is the reserved priority courier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierRoster {
    pub food_courier: String,
    pub parcel_courier: String,
    pub express_courier: String,
}

impl Default for CourierRoster {
    fn default() -> Self {
        Self {
            food_courier: "Marta Ibanez".to_string(),
            parcel_courier: "Jorge Paredes".to_string(),
            express_courier: "Valeria Soto".to_string(),
        }
    }
}

impl CourierRoster {
    pub fn courier_for(&self, kind: OrderKind) -> &str {
        match kind {
            OrderKind::Food => &self.food_courier,
            OrderKind::Parcel => &self.parcel_courier,
            OrderKind::Express => &self.express_courier,
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
    fn test_food_delivery_time() {
        assert_eq!(OrderKind::Food.estimated_minutes(0.0), 15);
        assert_eq!(OrderKind::Food.estimated_minutes(4.0), 23);
        // 2 × 2.7 = 5.4, truncated
        assert_eq!(OrderKind::Food.estimated_minutes(2.7), 20);
    }

    #[test]
    fn test_parcel_delivery_time() {
        assert_eq!(OrderKind::Parcel.estimated_minutes(0.0), 20);
        assert_eq!(OrderKind::Parcel.estimated_minutes(6.0), 29);
        // 20 + 1.5 × 3.5 = 25.25, truncated
        assert_eq!(OrderKind::Parcel.estimated_minutes(3.5), 25);
    }

    #[test]
    fn test_express_delivery_time_threshold_is_strict() {
        assert_eq!(OrderKind::Express.estimated_minutes(0.0), 10);
        assert_eq!(OrderKind::Express.estimated_minutes(5.0), 10);
        assert_eq!(OrderKind::Express.estimated_minutes(5.1), 15);
        assert_eq!(OrderKind::Express.estimated_minutes(7.0), 15);
    }

    #[test]
    fn test_delivery_times_monotonic_in_distance() {
        for kind in [OrderKind::Food, OrderKind::Parcel, OrderKind::Express] {
            let mut last = kind.estimated_minutes(0.0);
            for step in 1..=60 {
                let minutes = kind.estimated_minutes(step as f64 * 0.25);
                assert!(minutes >= last, "{kind:?} regressed at step {step}");
                last = minutes;
            }
        }
    }

    #[test]
    fn test_default_roster_covers_every_kind() {
        let roster = CourierRoster::default();
        for kind in [OrderKind::Food, OrderKind::Parcel, OrderKind::Express] {
            assert!(!roster.courier_for(kind).trim().is_empty());
        }
        assert_eq!(roster.courier_for(OrderKind::Express), "Valeria Soto");
    }
}
