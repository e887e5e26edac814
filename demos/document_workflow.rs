//! Document Approval Workflow
//!
//! This example demonstrates veto semantics: a listener aborts the
//! "publish" transition for documents that have not passed review, and
//! the caller inspects the resulting error.
//!
//! Key concepts:
//! - Aborting a transition from a listener
//! - The abort-beats-failure guarantee (state never changes on a veto)
//! - Matching error variants to tell "nothing changed" from
//!   "changed, but a listener failed"
//!
//! Run with: cargo run --example document_workflow

use transom::dispatch::ListenerList;
use transom::machine::{EventStateMachine, StateMachineError};

fn main() {
    let mut listeners: ListenerList = ListenerList::new();

    // Gatekeeper: publishing is only allowed from the "approved" state.
    listeners.listen(|event| {
        let from = event
            .param("current_state")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        if event.transition() == "publish" && from != "approved" {
            println!("[gate] refusing to publish from '{from}'");
            event.abort_transition(true).stop_propagation(true);
        }
        Ok(())
    });

    let mut document: EventStateMachine<ListenerList> = EventStateMachine::builder()
        .dispatcher(listeners)
        .initial("draft")
        .allow("draft", ["submit"])
        .allow("submit", ["approve", "reject"])
        .allow("approved", ["publish"])
        .build()
        .expect("document machine config is complete");

    // Trying to publish a draft gets vetoed.
    match document.transition("publish") {
        Err(StateMachineError::CouldNotTransition { transition, .. }) => {
            println!("vetoed: '{transition}', still in '{}'", document.state());
        }
        Err(err) => println!("unexpected error: {err}"),
        Ok(_) => println!("published?!"),
    }

    // The proper path goes through review.
    document
        .transition("submit")
        .and_then(|d| d.transition("approve"))
        .expect("review path");

    // Destination defaults to the transition name; rename the review
    // outcome to the state the gatekeeper expects.
    document
        .dispatcher_mut()
        .listen(|event| {
            if event.transition() == "approve" {
                event.set_new_state(Some("approved"));
            }
            Ok(())
        });

    document.transition("approve").expect("re-approve");
    document.transition("publish").expect("publish");

    println!("final state: {}", document.state());
}
