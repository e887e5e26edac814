//! The event-driven state machine and its transition algorithm.
//!
//! The machine holds no internal state graph. Each call to
//! [`transition`](EventStateMachine::transition) builds a fresh
//! [`TransitionEvent`], triggers it through the configured dispatcher,
//! and then reconciles whatever the listeners did — abort flags,
//! destination overrides, or outright failures — into exactly one of:
//! a committed state change, or an error.
//!
//! The reconciliation order matters and is deliberate:
//! - **Abort beats failure.** A vetoed transition reports
//!   [`CouldNotTransition`](StateMachineError::CouldNotTransition) even
//!   when a listener also failed; the failure rides along as the
//!   subordinate cause.
//! - **Failure never blocks a non-aborted commit.** If listeners did not
//!   abort, the resolved state is committed *before* a captured listener
//!   failure is surfaced as
//!   [`DispatchFailed`](StateMachineError::DispatchFailed). Listeners
//!   that want to prevent a state change must abort, not throw — and
//!   must stop propagation if they need the abort to stick.

mod error;

pub use error::StateMachineError;

use crate::builder::EventStateMachineBuilder;
use crate::core::{Symbol, TransitionEvent, TransitionTable};
use crate::core::{PARAM_CURRENT_STATE, PARAM_NEW_STATE};
use crate::dispatch::{
    DefaultEventFactory, EventDescriptor, EventDispatcher, EventFactory,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Default display format for event names.
///
/// A `%s` placeholder, if present, is replaced with the transition name;
/// the default deliberately has none, so every transition dispatches
/// under one shared name and listeners discriminate via
/// [`TransitionEvent::transition`].
pub const DEFAULT_EVENT_NAME_FORMAT: &str = "on_transition";

/// An event-driven state machine over string-like states.
///
/// `D` is the dispatcher collaborator; `T` the optional target context
/// attached to every event (the subject this machine models).
///
/// The happy path needs no transition table and no listeners: with
/// nothing registered, transitioning moves the machine to a state named
/// after the transition itself.
///
/// # Example
///
/// ```rust
/// use transom::dispatch::ListenerList;
/// use transom::machine::EventStateMachine;
///
/// let mut machine: EventStateMachine<ListenerList> =
///     EventStateMachine::new(ListenerList::new(), "draft");
///
/// machine.transition("submit").unwrap();
/// assert_eq!(machine.state(), "submit");
/// ```
pub struct EventStateMachine<D, T = ()> {
    dispatcher: D,
    event_factory: Box<dyn EventFactory<T>>,
    state: Symbol,
    transitions: TransitionTable,
    event_name_format: String,
    target: Option<T>,
    event_params: HashMap<String, Value>,
}

impl<D, T> EventStateMachine<D, T>
where
    D: EventDispatcher<T>,
    T: Clone,
{
    /// Create a machine with a dispatcher and an initial state.
    ///
    /// The transitions table starts empty (every probe answers "not
    /// possible") and events use [`DEFAULT_EVENT_NAME_FORMAT`] with no
    /// target and no static params. Use [`builder`](Self::builder) for
    /// full configuration.
    pub fn new(dispatcher: D, initial_state: impl Into<Symbol>) -> Self {
        Self {
            dispatcher,
            event_factory: Box::new(DefaultEventFactory),
            state: initial_state.into(),
            transitions: TransitionTable::new(),
            event_name_format: DEFAULT_EVENT_NAME_FORMAT.to_string(),
            target: None,
            event_params: HashMap::new(),
        }
    }

    /// Start building a fully-configured machine.
    pub fn builder() -> EventStateMachineBuilder<D, T> {
        EventStateMachineBuilder::new()
    }

    pub(crate) fn from_parts(
        dispatcher: D,
        event_factory: Box<dyn EventFactory<T>>,
        state: Symbol,
        transitions: TransitionTable,
        event_name_format: String,
        target: Option<T>,
        event_params: HashMap<String, Value>,
    ) -> Self {
        Self {
            dispatcher,
            event_factory,
            state,
            transitions,
            event_name_format,
            target,
            event_params,
        }
    }

    /// The current state. Never fails; a machine always has exactly one.
    pub fn state(&self) -> &Symbol {
        &self.state
    }

    /// Whether the transitions table lists `transition` as possible from
    /// the current state.
    ///
    /// Advisory only: [`transition`](Self::transition) does not consult
    /// the table. A current state absent from the table answers `false`,
    /// never an error.
    pub fn can_transition(&self, transition: impl AsRef<str>) -> bool {
        self.transitions
            .allows(self.state.as_str(), transition.as_ref())
    }

    /// The ordered transitions listed as possible from the current
    /// state; empty when the current state has no table entry.
    pub fn possible_transitions(&self) -> &[Symbol] {
        self.transitions.possible(self.state.as_str())
    }

    /// The dispatcher collaborator.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Mutable access to the dispatcher, e.g. to register listeners on a
    /// [`ListenerList`](crate::dispatch::ListenerList) after
    /// construction.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// The configured target context attached to every event.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Attempt a transition.
    ///
    /// Builds and triggers a [`TransitionEvent`], then reconciles the
    /// outcome:
    ///
    /// 1. A dispatch failure is captured, not raised — listeners that
    ///    ran before the failure still count.
    /// 2. If a listener aborted, nothing changes and
    ///    [`CouldNotTransition`](StateMachineError::CouldNotTransition)
    ///    is raised (with the captured failure, if any, as its cause).
    /// 3. Otherwise the new state is the event's `new_state` param if
    ///    set, else the transition name itself. A null resolution raises
    ///    [`NullNewState`](StateMachineError::NullNewState) with nothing
    ///    changed.
    /// 4. The resolved state is committed — even when a dispatch failure
    ///    was captured. Only then is a captured failure surfaced as
    ///    [`DispatchFailed`](StateMachineError::DispatchFailed), so that
    ///    error means "the state changed, and a listener failed".
    ///
    /// Returns `&mut Self` for chaining further transitions.
    pub fn transition(
        &mut self,
        transition: impl Into<Symbol>,
    ) -> Result<&mut Self, StateMachineError> {
        let transition = transition.into();
        let mut event = self.make_event(&transition);

        let dispatch_failure = self.dispatcher.trigger(&mut event).err();

        if event.is_transition_aborted() {
            return Err(StateMachineError::CouldNotTransition {
                transition,
                state: self.state.clone(),
                cause: dispatch_failure,
            });
        }

        let Some(new_state) = resolve_new_state(&event) else {
            return Err(StateMachineError::NullNewState {
                transition,
                state: self.state.clone(),
                cause: dispatch_failure,
            });
        };

        self.state = new_state;

        if let Some(cause) = dispatch_failure {
            return Err(StateMachineError::DispatchFailed {
                transition,
                state: self.state.clone(),
                cause,
            });
        }

        Ok(self)
    }

    /// Build the event for one attempt via the configured factory.
    fn make_event(&self, transition: &Symbol) -> TransitionEvent<T> {
        self.event_factory.make(EventDescriptor {
            name: self.event_name(transition),
            transition: transition.clone(),
            target: self.target.clone(),
            params: self.event_params_for(),
        })
    }

    /// The display name a transition dispatches under.
    fn event_name(&self, transition: &Symbol) -> String {
        self.event_name_format.replace("%s", transition.as_str())
    }

    /// Configured static params overlaid with the current state.
    /// The current-state key always wins over a same-named static param.
    fn event_params_for(&self) -> HashMap<String, Value> {
        let mut params = self.event_params.clone();
        params.insert(
            PARAM_CURRENT_STATE.to_string(),
            Value::String(self.state.as_str().to_string()),
        );
        params
    }
}

// The dispatcher and event factory are not debuggable in general.
impl<D, T> fmt::Debug for EventStateMachine<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStateMachine")
            .field("state", &self.state)
            .field("transitions", &self.transitions)
            .field("event_name_format", &self.event_name_format)
            .field("event_params", &self.event_params)
            .finish_non_exhaustive()
    }
}

/// The destination state an event resolved to, or `None` for "null".
///
/// An absent `new_state` param defaults to the transition name. A
/// present param must be a JSON string; `null` (and any non-string
/// value) resolves to "null" and fails the transition.
fn resolve_new_state<T>(event: &TransitionEvent<T>) -> Option<Symbol> {
    match event.param(PARAM_NEW_STATE) {
        None => Some(event.transition().clone()),
        Some(Value::String(state)) => Some(Symbol::from(state.as_str())),
        Some(_) => None,
    }
}
