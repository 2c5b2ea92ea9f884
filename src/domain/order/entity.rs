use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::events::{CourierAssigned, OrderCancelled, OrderEvent, PrecheckPassed};
use super::rules::CourierRoster;
use super::value_objects::{
    AssignmentMode, Courier, DispatchBlock, DispatchOutcome, OrderKind,
};

// ============================================================================
// Order Entity - Lifecycle and Business Rules
// ============================================================================
//
// State machine per order: Unassigned -> Assigned, with Cancelled reachable
// from either state and terminal for state changes. "Dispatched" is never
// stored; the dispatch gate evaluates it live from `courier` and `cancelled`
// on every call.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // Identity
    id: i64,

    // Immutable delivery data
    delivery_address: String,
    distance_km: f64,
    kind: OrderKind,

    // Mutable lifecycle state
    courier: Option<Courier>,
    cancelled: bool,

    // Audit trail
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Validated constructor. Fails before any field is stored, so no
    /// partial order is ever observable.
    pub fn new(
        id: i64,
        delivery_address: &str,
        distance_km: f64,
        kind: OrderKind,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id));
        }

        let address = delivery_address.trim();
        if address.is_empty() {
            return Err(ValidationError::BlankAddress);
        }

        // NaN fails the comparison and is rejected along with negatives.
        if !(distance_km >= 0.0) {
            return Err(ValidationError::NegativeDistance(distance_km));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            delivery_address: address.to_string(),
            distance_km,
            kind,
            courier: None,
            cancelled: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn food(id: i64, delivery_address: &str, distance_km: f64) -> Result<Self, ValidationError> {
        Self::new(id, delivery_address, distance_km, OrderKind::Food)
    }

    pub fn parcel(id: i64, delivery_address: &str, distance_km: f64) -> Result<Self, ValidationError> {
        Self::new(id, delivery_address, distance_km, OrderKind::Parcel)
    }

    pub fn express(id: i64, delivery_address: &str, distance_km: f64) -> Result<Self, ValidationError> {
        Self::new(id, delivery_address, distance_km, OrderKind::Express)
    }

    // ------------------------------------------------------------------
    // Assignment
    // ------------------------------------------------------------------

    /// Automatic assignment: run the kind's pre-check, then commit the
    /// roster's courier for this kind.
    ///
    /// The automatic path always commits a courier. Re-invocation overwrites
    /// the field with the same deterministic value and re-emits the events.
    /// Fails only when the roster entry for this kind is blank.
    pub fn assign_automatically(
        &mut self,
        roster: &CourierRoster,
    ) -> Result<Vec<OrderEvent>, ValidationError> {
        let courier = Courier::parse(roster.courier_for(self.kind))?;
        let mut events = self.run_precheck();
        events.push(self.commit_courier(courier, AssignmentMode::Automatic));
        Ok(events)
    }

    /// Manual assignment: validate the name first, re-run the kind's
    /// pre-check, then commit the trimmed name over whatever the automatic
    /// rule selected. Nothing is emitted or mutated when the name is blank.
    pub fn assign_manually(&mut self, name: &str) -> Result<Vec<OrderEvent>, ValidationError> {
        let courier = Courier::parse(name)?;
        let mut events = self.run_precheck();
        events.push(self.commit_courier(courier, AssignmentMode::Manual));
        Ok(events)
    }

    fn run_precheck(&self) -> Vec<OrderEvent> {
        match self.kind.precheck() {
            Some(check) => vec![OrderEvent::PrecheckPassed(PrecheckPassed {
                order_id: self.id,
                kind: self.kind,
                check,
            })],
            None => Vec::new(),
        }
    }

    fn commit_courier(&mut self, courier: Courier, mode: AssignmentMode) -> OrderEvent {
        let assigned_at = Utc::now();
        tracing::debug!(order_id = self.id, courier = %courier, ?mode, "courier assigned");

        self.courier = Some(courier.clone());
        self.updated_at = assigned_at;

        OrderEvent::CourierAssigned(CourierAssigned {
            order_id: self.id,
            courier,
            mode,
            assigned_at,
        })
    }

    // ------------------------------------------------------------------
    // Dispatch and cancellation
    // ------------------------------------------------------------------

    /// Dispatch gate. A pure check: reports whether the order could go out
    /// right now, mutating nothing, so it can be called repeatedly with the
    /// same outcome for the same state.
    pub fn dispatch(&self) -> DispatchOutcome {
        if self.cancelled {
            return DispatchOutcome::Blocked(DispatchBlock::Cancelled);
        }
        if self.courier.is_none() {
            return DispatchOutcome::Blocked(DispatchBlock::NoCourier);
        }
        DispatchOutcome::Dispatched
    }

    /// Unconditional cancellation. Calling it again keeps `cancelled` true
    /// and still reports; there is no un-cancel.
    pub fn cancel(&mut self) -> OrderEvent {
        let cancelled_at = Utc::now();
        self.cancelled = true;
        self.updated_at = cancelled_at;
        tracing::debug!(order_id = self.id, "order cancelled");

        OrderEvent::Cancelled(OrderCancelled {
            order_id: self.id,
            cancelled_at,
        })
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Estimated delivery time in whole minutes, per this kind's formula.
    pub fn estimated_minutes(&self) -> u32 {
        self.kind.estimated_minutes(self.distance_km)
    }

    /// Deterministic multi-line summary: zero-padded id, address, distance
    /// (integral distances render without a decimal point), courier or the
    /// explicit `unassigned` marker, and the estimated minutes.
    pub fn summary(&self) -> String {
        let courier = self
            .courier
            .as_ref()
            .map(Courier::as_str)
            .unwrap_or("unassigned");

        format!(
            "Order #{:03}\nAddress: {}\nDistance: {} km\nCourier: {}\nEstimated delivery: {} minutes",
            self.id,
            self.delivery_address,
            self.distance_km,
            courier,
            self.estimated_minutes(),
        )
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn courier(&self) -> Option<&Courier> {
        self.courier.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

// Identity-based equality: two orders are the same order iff their ids match.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
