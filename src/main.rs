use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use speedfast_dispatch::domain::order::{serialize_event, CourierRoster, Order, OrderEvent};
use speedfast_dispatch::history::{DeliveryLog, SharedOrder};

// ============================================================================
// Demo Driver
// ============================================================================
//
// Wires a fixed simulation scenario against the core API and routes its
// output to the console. No business rules live here.
//
// ============================================================================

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering.
    // Default to INFO level, can be overridden with RUST_LOG env var.
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("🚀 Starting SpeedFast dispatch simulation");

    let roster = CourierRoster::default();
    let mut log = DeliveryLog::new();

    let food: SharedOrder = Rc::new(RefCell::new(Order::food(101, "Av. Central 123", 4.0)?));
    let parcel: SharedOrder = Rc::new(RefCell::new(Order::parcel(102, "Calle Norte 456", 6.0)?));
    let express: SharedOrder = Rc::new(RefCell::new(Order::express(103, "Pasaje Sur 789", 7.0)?));

    // Automatic assignment, summary, dispatch gate, registration.
    for order in [&food, &parcel, &express] {
        {
            let mut order = order.borrow_mut();
            println!("[{}]", order.kind().label());
            for event in order.assign_automatically(&roster)? {
                render(&event)?;
            }
            println!("{}", order.summary());
            println!("→ {}", order.dispatch());
        }
        log.register(order);
        println!();
    }

    // Manual assignment overrides the automatic rule.
    println!("=== Manual courier assignment ===\n");
    for event in food.borrow_mut().assign_manually("Pedro Morales")? {
        render(&event)?;
    }
    println!("{}\n", food.borrow().summary());

    // Cancellation blocks the dispatch gate.
    tracing::info!("Cancelling express order #103");
    let event = express.borrow_mut().cancel();
    render(&event)?;
    println!("→ {}", express.borrow().dispatch());
    println!();

    println!("History:");
    for line in log.report() {
        println!("{line}");
    }

    tracing::info!("🎉 Simulation complete");

    Ok(())
}

fn render(event: &OrderEvent) -> anyhow::Result<()> {
    tracing::debug!(payload = %serialize_event(event)?, "lifecycle event");
    println!("→ {event}");
    Ok(())
}
