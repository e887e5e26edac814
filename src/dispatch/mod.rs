//! Event dispatch and event construction seams.
//!
//! The machine does not own listener registration. It hands each
//! [`TransitionEvent`] to an [`EventDispatcher`], which invokes whatever
//! listeners it knows about, synchronously and in order, before the
//! machine inspects the outcome. Any in-process pub/sub bus can sit
//! behind the trait; [`ListenerList`] is the batteries-included
//! implementation backed by an ordered list of closures.
//!
//! Event construction is likewise a seam: embedders that need richer
//! event objects supply an [`EventFactory`]; everyone else gets
//! [`DefaultEventFactory`].

use crate::core::{Symbol, TransitionEvent};
use serde_json::Value;
use std::collections::HashMap;

/// The error type dispatchers and listeners fail with.
///
/// Listener failures are arbitrary by nature, so they travel as boxed
/// errors and are re-attached as sources on the machine's own error
/// kinds.
pub type DispatchError = Box<dyn std::error::Error + Send + Sync>;

/// Synchronous event dispatch.
///
/// `trigger` runs every relevant listener against the event, in
/// registration order, before returning. Listeners mutate the event in
/// place; the machine reads the flags and params they left behind once
/// `trigger` returns or fails.
///
/// Implementations decide what "relevant" means (e.g. subscription by
/// event name) and are responsible for honoring the event's
/// stop-propagation flag.
pub trait EventDispatcher<T> {
    /// Dispatch one event. An error here means a listener (or the
    /// dispatch mechanism itself) failed; listeners invoked before the
    /// failure may still have mutated the event.
    fn trigger(&self, event: &mut TransitionEvent<T>) -> Result<(), DispatchError>;
}

/// A listener held by [`ListenerList`].
pub type Listener<T> = Box<dyn Fn(&mut TransitionEvent<T>) -> Result<(), DispatchError>>;

/// An ordered list of listener closures behind the dispatcher seam.
///
/// Every listener sees every event, in registration order. A listener
/// that stops propagation prevents all later listeners from running; a
/// listener that fails ends the dispatch immediately with its error.
///
/// # Example
///
/// ```rust
/// use transom::dispatch::{EventDispatcher, ListenerList};
/// use transom::core::TransitionEvent;
///
/// let mut listeners: ListenerList = ListenerList::new();
/// listeners.listen(|event| {
///     if event.transition() == "cancel" {
///         event.abort_transition(true);
///     }
///     Ok(())
/// });
///
/// let mut event = TransitionEvent::new("on_transition", "cancel");
/// listeners.trigger(&mut event).unwrap();
/// assert!(event.is_transition_aborted());
/// ```
pub struct ListenerList<T = ()> {
    listeners: Vec<Listener<T>>,
}

impl<T> ListenerList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener. Listeners run in the order they were added.
    pub fn listen<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&mut TransitionEvent<T>) -> Result<(), DispatchError> + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for ListenerList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventDispatcher<T> for ListenerList<T> {
    fn trigger(&self, event: &mut TransitionEvent<T>) -> Result<(), DispatchError> {
        for listener in &self.listeners {
            if event.is_propagation_stopped() {
                break;
            }
            listener(event)?;
        }
        Ok(())
    }
}

/// The ingredients an [`EventFactory`] turns into a [`TransitionEvent`].
pub struct EventDescriptor<T> {
    /// Display name computed from the machine's event-name format.
    pub name: String,
    /// The transition being attempted.
    pub transition: Symbol,
    /// The machine's configured target context, if any.
    pub target: Option<T>,
    /// Seeded params: configured static params overlaid with the
    /// current state.
    pub params: HashMap<String, Value>,
}

/// Pluggable event construction.
///
/// The machine builds an [`EventDescriptor`] per attempt and asks the
/// factory for the event to dispatch. Custom factories can seed extra
/// params or pre-set flags; the default factory maps the descriptor
/// straight onto a plain event.
pub trait EventFactory<T> {
    /// Build the event for one transition attempt.
    fn make(&self, descriptor: EventDescriptor<T>) -> TransitionEvent<T>;
}

/// Builds plain [`TransitionEvent`]s from descriptors, nothing more.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEventFactory;

impl<T> EventFactory<T> for DefaultEventFactory {
    fn make(&self, descriptor: EventDescriptor<T>) -> TransitionEvent<T> {
        TransitionEvent::with_details(
            descriptor.name,
            descriptor.transition,
            descriptor.target,
            descriptor.params,
        )
    }
}
