//! Errors raised by the transition algorithm.

use crate::core::Symbol;
use crate::dispatch::DispatchError;
use thiserror::Error;

/// Why a call to [`transition`](crate::machine::EventStateMachine::transition)
/// failed.
///
/// Every variant records the transition that was attempted and the
/// machine's state at the moment the error was raised, so the error
/// alone is enough to diagnose what happened. Note the state semantics
/// differ per variant: [`CouldNotTransition`](Self::CouldNotTransition)
/// and [`NullNewState`](Self::NullNewState) leave the machine unchanged,
/// while [`DispatchFailed`](Self::DispatchFailed) is raised *after* the
/// new state was committed — callers that need to know whether anything
/// changed must match the variant, not just catch the type.
#[derive(Debug, Error)]
pub enum StateMachineError {
    /// A listener vetoed the transition. The machine is unchanged.
    ///
    /// When a listener also failed during the same dispatch, its error
    /// rides along as the subordinate `cause`: abortion wins over the
    /// failure, but the failure is not swallowed.
    #[error("transition '{transition}' was aborted")]
    CouldNotTransition {
        /// The transition that was vetoed.
        transition: Symbol,
        /// The machine's (unchanged) state.
        state: Symbol,
        /// A listener failure from the same dispatch, if one occurred.
        #[source]
        cause: Option<DispatchError>,
    },

    /// No destination state could be resolved: a listener wrote a null
    /// destination override. The machine is unchanged.
    #[error("status after transition '{transition}' is null")]
    NullNewState {
        /// The transition whose destination resolved to null.
        transition: Symbol,
        /// The machine's (unchanged) state.
        state: Symbol,
        /// A listener failure from the same dispatch, if one occurred.
        #[source]
        cause: Option<DispatchError>,
    },

    /// A listener or the dispatch mechanism failed, but no listener
    /// aborted — so the new state was committed first, and the failure
    /// is surfaced after the fact.
    #[error("an event for transition '{transition}' threw an error")]
    DispatchFailed {
        /// The transition that was committed despite the failure.
        transition: Symbol,
        /// The machine's state *after* the commit.
        state: Symbol,
        /// The underlying listener or dispatcher failure.
        #[source]
        cause: DispatchError,
    },
}

impl StateMachineError {
    /// The transition that was being attempted.
    pub fn transition(&self) -> &Symbol {
        match self {
            Self::CouldNotTransition { transition, .. }
            | Self::NullNewState { transition, .. }
            | Self::DispatchFailed { transition, .. } => transition,
        }
    }

    /// The machine's state when the error was raised.
    pub fn state(&self) -> &Symbol {
        match self {
            Self::CouldNotTransition { state, .. }
            | Self::NullNewState { state, .. }
            | Self::DispatchFailed { state, .. } => state,
        }
    }

    /// The underlying dispatch failure, if one was captured.
    pub fn cause(&self) -> Option<&DispatchError> {
        match self {
            Self::CouldNotTransition { cause, .. } | Self::NullNewState { cause, .. } => {
                cause.as_ref()
            }
            Self::DispatchFailed { cause, .. } => Some(cause),
        }
    }

    /// Whether the machine's state changed before this error was raised.
    pub fn state_was_committed(&self) -> bool {
        matches!(self, Self::DispatchFailed { .. })
    }
}
