//! Core data types for event-driven transitions.
//!
//! This module contains the plain data the machine and its
//! collaborators exchange:
//! - Opaque state/transition identifiers via [`Symbol`]
//! - The mutable per-attempt [`TransitionEvent`] record
//! - The advisory [`TransitionTable`] lookup
//!
//! Nothing in this module performs dispatch or mutates machine state;
//! all control flow lives in [`crate::machine`].

mod event;
mod state;
mod transitions;

pub use event::{
    TransitionEvent, PARAM_CURRENT_STATE, PARAM_NEW_STATE, PARAM_TRANSITION,
};
pub use state::Symbol;
pub use transitions::TransitionTable;
