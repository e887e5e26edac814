//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building an event state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Dispatcher not specified. Call .dispatcher(dispatcher) before .build()")]
    MissingDispatcher,
}
