//! Transom: an event-driven state machine
//!
//! Transom is a small library primitive for systems that need
//! observable, interceptable state changes: workflow engines, order
//! pipelines, UI wizards. A machine holds one current state and moves by
//! triggering a mutable [`TransitionEvent`] through a dispatcher;
//! registered listeners may redirect the destination state or veto the
//! transition entirely.
//!
//! There is no internal state graph. Unless a listener overrides it, the
//! destination state is simply named after the transition — so the
//! zero-configuration machine "just works", and richer semantics are
//! layered on through listeners and the advisory possible-transitions
//! table.
//!
//! # Core Concepts
//!
//! - **Symbol**: opaque string-like identifier for states and transitions
//! - **TransitionEvent**: mutable record shared with listeners per attempt
//! - **EventDispatcher**: the synchronous dispatch seam; [`ListenerList`]
//!   is the built-in implementation
//! - **Abort beats failure**: a vetoed transition never commits, while a
//!   listener failure without a veto commits first and errors after
//!
//! # Example
//!
//! ```rust
//! use transom::dispatch::ListenerList;
//! use transom::machine::{EventStateMachine, StateMachineError};
//!
//! let mut listeners = ListenerList::new();
//! listeners.listen(|event| {
//!     if event.transition() == "cancel" {
//!         event.abort_transition(true);
//!     }
//!     Ok(())
//! });
//!
//! let mut machine: EventStateMachine<ListenerList> = EventStateMachine::builder()
//!     .dispatcher(listeners)
//!     .initial("pending")
//!     .allow("pending", ["ship", "cancel"])
//!     .build()
//!     .unwrap();
//!
//! machine.transition("ship").unwrap();
//! assert_eq!(machine.state(), "ship");
//!
//! let err = machine.transition("cancel").unwrap_err();
//! assert!(matches!(err, StateMachineError::CouldNotTransition { .. }));
//! assert_eq!(machine.state(), "ship");
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, EventStateMachineBuilder};
pub use self::core::{Symbol, TransitionEvent, TransitionTable};
pub use self::dispatch::{DispatchError, EventDispatcher, EventFactory, ListenerList};
pub use self::machine::{EventStateMachine, StateMachineError};
