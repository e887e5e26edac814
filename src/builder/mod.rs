//! Builder API for configuring event state machines.
//!
//! [`EventStateMachine::new`](crate::machine::EventStateMachine::new)
//! covers the table-free case; everything else — a transitions table, a
//! custom event-name format, a target context, static event params, a
//! custom event factory — goes through the builder.

pub mod error;

pub use error::BuildError;

use crate::core::{Symbol, TransitionTable};
use crate::dispatch::{DefaultEventFactory, EventDispatcher, EventFactory};
use crate::machine::{EventStateMachine, DEFAULT_EVENT_NAME_FORMAT};
use serde_json::Value;
use std::collections::HashMap;

/// Builder for [`EventStateMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use transom::builder::EventStateMachineBuilder;
/// use transom::dispatch::ListenerList;
/// use transom::machine::EventStateMachine;
///
/// let machine: EventStateMachine<ListenerList> = EventStateMachineBuilder::new()
///     .dispatcher(ListenerList::new())
///     .initial("draft")
///     .allow("draft", ["submit", "trash"])
///     .allow("pending", ["approve", "reject"])
///     .event_name_format("on_%s_transition")
///     .event_param("source", "api")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "draft");
/// assert!(machine.can_transition("submit"));
/// ```
pub struct EventStateMachineBuilder<D, T = ()> {
    dispatcher: Option<D>,
    event_factory: Option<Box<dyn EventFactory<T>>>,
    initial: Option<Symbol>,
    transitions: TransitionTable,
    event_name_format: Option<String>,
    target: Option<T>,
    event_params: HashMap<String, Value>,
}

impl<D, T> EventStateMachineBuilder<D, T>
where
    D: EventDispatcher<T>,
    T: Clone,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            dispatcher: None,
            event_factory: None,
            initial: None,
            transitions: TransitionTable::new(),
            event_name_format: None,
            target: None,
            event_params: HashMap::new(),
        }
    }

    /// Set the dispatcher collaborator (required).
    pub fn dispatcher(mut self, dispatcher: D) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<Symbol>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Replace the whole possible-transitions table.
    pub fn transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    /// Add one state's possible transitions to the table.
    pub fn allow<I, S>(mut self, state: impl Into<Symbol>, transitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.transitions.insert(state, transitions);
        self
    }

    /// Set the event-name format. A `%s` placeholder is replaced with
    /// the transition name. Defaults to
    /// [`DEFAULT_EVENT_NAME_FORMAT`].
    pub fn event_name_format(mut self, format: impl Into<String>) -> Self {
        self.event_name_format = Some(format.into());
        self
    }

    /// Set the target context attached to every event.
    pub fn target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// Add one static param seeded into every event.
    ///
    /// The reserved current-state key is overwritten per attempt and
    /// cannot be configured away.
    pub fn event_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.event_params.insert(key.into(), value.into());
        self
    }

    /// Replace all static event params.
    pub fn event_params(mut self, params: HashMap<String, Value>) -> Self {
        self.event_params = params;
        self
    }

    /// Substitute a custom event factory. Defaults to
    /// [`DefaultEventFactory`].
    pub fn event_factory(mut self, factory: impl EventFactory<T> + 'static) -> Self {
        self.event_factory = Some(Box::new(factory));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<EventStateMachine<D, T>, BuildError> {
        let dispatcher = self.dispatcher.ok_or(BuildError::MissingDispatcher)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(EventStateMachine::from_parts(
            dispatcher,
            self.event_factory
                .unwrap_or_else(|| Box::new(DefaultEventFactory)),
            initial,
            self.transitions,
            self.event_name_format
                .unwrap_or_else(|| DEFAULT_EVENT_NAME_FORMAT.to_string()),
            self.target,
            self.event_params,
        ))
    }
}

impl<D, T> Default for EventStateMachineBuilder<D, T>
where
    D: EventDispatcher<T>,
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
