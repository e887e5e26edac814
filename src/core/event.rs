//! The mutable event record shared with transition listeners.
//!
//! A [`TransitionEvent`] is built fresh for every transition attempt,
//! handed to the dispatcher by mutable reference, and discarded once the
//! attempt resolves. Listeners communicate with the machine by mutating
//! it: aborting the transition, overriding the destination state, or
//! stopping propagation to later listeners.

use crate::core::Symbol;
use serde_json::Value;
use std::collections::HashMap;

/// Event param key holding the state the machine was in when the
/// transition attempt began.
pub const PARAM_CURRENT_STATE: &str = "current_state";

/// Event param key holding an explicit destination-state override.
///
/// Absent, the machine transitions to a state named after the transition
/// itself. A JSON `null` under this key vetoes resolution and fails the
/// transition with a null-state error.
pub const PARAM_NEW_STATE: &str = "new_state";

/// Event param key conventionally holding the transition name, for
/// listeners that only receive params.
pub const PARAM_TRANSITION: &str = "transition";

/// A mutable record describing one transition attempt.
///
/// The type parameter `T` is the target context attached to every event
/// by the machine that built it (e.g. the order or document the machine
/// models); `()` when no context is configured.
///
/// # Example
///
/// ```rust
/// use transom::core::{TransitionEvent, PARAM_NEW_STATE};
///
/// let mut event: TransitionEvent = TransitionEvent::new("on_transition", "submit");
/// assert!(!event.is_transition_aborted());
///
/// // What a listener might do:
/// event.set_new_state(Some("under_review"));
/// event.abort_transition(false);
///
/// assert_eq!(event.param(PARAM_NEW_STATE), Some(&"under_review".into()));
/// ```
#[derive(Debug)]
pub struct TransitionEvent<T = ()> {
    name: String,
    transition: Symbol,
    target: Option<T>,
    params: HashMap<String, Value>,
    propagation_stopped: bool,
    transition_aborted: bool,
}

impl<T> TransitionEvent<T> {
    /// Create an event with no target and no params.
    pub fn new(name: impl Into<String>, transition: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            transition: transition.into(),
            target: None,
            params: HashMap::new(),
            propagation_stopped: false,
            transition_aborted: false,
        }
    }

    /// Create a fully-populated event.
    pub fn with_details(
        name: impl Into<String>,
        transition: impl Into<Symbol>,
        target: Option<T>,
        params: HashMap<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            transition: transition.into(),
            target,
            params,
            propagation_stopped: false,
            transition_aborted: false,
        }
    }

    /// The display name the event was dispatched under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The transition that produced this event.
    pub fn transition(&self) -> &Symbol {
        &self.transition
    }

    /// The target context, if the machine was configured with one.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// All event params.
    pub fn params(&self) -> &HashMap<String, Value> {
        &self.params
    }

    /// A single param by key, or `None` when absent.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Set a single param, replacing any previous value under the key.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replace all params.
    pub fn set_params(&mut self, params: HashMap<String, Value>) -> &mut Self {
        self.params = params;
        self
    }

    /// Write the destination-state override param.
    ///
    /// `None` stores a JSON `null`, which the machine treats as "no state
    /// could be resolved" and reports as an error.
    pub fn set_new_state(&mut self, state: Option<impl Into<Symbol>>) -> &mut Self {
        let value = match state {
            Some(state) => Value::String(state.into().as_str().to_string()),
            None => Value::Null,
        };
        self.params.insert(PARAM_NEW_STATE.to_string(), value);
        self
    }

    /// Whether a listener has asked for propagation to stop.
    ///
    /// Advisory: the machine never reads this flag; honoring it is the
    /// dispatcher's responsibility.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Set or clear the stop-propagation flag.
    pub fn stop_propagation(&mut self, stop: bool) -> &mut Self {
        self.propagation_stopped = stop;
        self
    }

    /// Whether a listener has vetoed this transition.
    pub fn is_transition_aborted(&self) -> bool {
        self.transition_aborted
    }

    /// Set or clear the abort flag.
    ///
    /// A later listener may call `abort_transition(false)` to un-abort;
    /// listeners that must guarantee abortion should also stop
    /// propagation.
    pub fn abort_transition(&mut self, abort: bool) -> &mut Self {
        self.transition_aborted = abort;
        self
    }
}
