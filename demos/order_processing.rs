//! E-commerce Order Processing
//!
//! This example demonstrates an order lifecycle driven by transition
//! events, with a fraud-check listener that redirects suspicious orders
//! to a manual-review state instead of letting them ship.
//!
//! Key concepts:
//! - Table-driven possible transitions for UI/validation probing
//! - A listener overriding the destination state via the event params
//! - Target context carrying the order id to every listener
//!
//! Run with: cargo run --example order_processing

use transom::dispatch::ListenerList;
use transom::machine::EventStateMachine;

fn main() {
    let mut listeners: ListenerList<u64> = ListenerList::new();

    // Audit every transition attempt.
    listeners.listen(|event| {
        println!(
            "[audit] order {:?}: '{}' attempted from {:?}",
            event.target(),
            event.transition(),
            event.param("current_state")
        );
        Ok(())
    });

    // Fraud check: orders over the limit go to manual review instead of
    // shipping.
    listeners.listen(|event| {
        let total = event.param("total").and_then(|v| v.as_f64()).unwrap_or(0.0);
        if event.transition() == "ship" && total > 1_000.0 {
            println!("[fraud] total {total} over limit; redirecting to manual review");
            event.set_new_state(Some("manual_review"));
        }
        Ok(())
    });

    let mut order: EventStateMachine<ListenerList<u64>, u64> = EventStateMachine::builder()
        .dispatcher(listeners)
        .initial("draft")
        .allow("draft", ["pay", "cancel"])
        .allow("pay", ["ship", "refund"])
        .allow("manual_review", ["ship", "refund"])
        .event_name_format("on_%s_transition")
        .target(90_210)
        .event_param("total", 1_499.99)
        .build()
        .expect("order machine config is complete");

    println!("possible from '{}': {:?}", order.state(), order.possible_transitions());

    order.transition("pay").expect("payment transition");
    println!("state: {}", order.state());

    // The fraud listener redirects this one.
    order.transition("ship").expect("ship transition");
    println!("state after ship attempt: {}", order.state());

    // The reviewer rejects the order; refund it.
    order.transition("refund").expect("refund transition");
    println!("final state: {}", order.state());
}
