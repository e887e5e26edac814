//! The possible-transitions lookup table.
//!
//! Maps each state to the ordered list of transitions considered legal
//! from it. The table is advisory: it answers `can_transition` queries
//! and nothing more. It never gates the transition algorithm itself.

use crate::core::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from state to the ordered transitions possible from it.
///
/// Constructed once at machine setup and read-only thereafter. Probing a
/// state with no entry is not an error; it answers with an empty list so
/// callers can query any state without guarding against missing keys.
///
/// # Example
///
/// ```rust
/// use transom::core::TransitionTable;
///
/// let table = TransitionTable::new()
///     .state("draft", ["submit", "trash"])
///     .state("pending", ["approve", "reject"]);
///
/// assert!(table.allows("draft", "submit"));
/// assert!(!table.allows("draft", "approve"));
/// assert!(table.possible("published").is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    map: HashMap<Symbol, Vec<Symbol>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state and its possible transitions, chainably.
    pub fn state<I, S>(mut self, state: impl Into<Symbol>, transitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.insert(state, transitions);
        self
    }

    /// Add a state and its possible transitions.
    ///
    /// Inserting a state twice replaces its earlier list.
    pub fn insert<I, S>(&mut self, state: impl Into<Symbol>, transitions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.map.insert(
            state.into(),
            transitions.into_iter().map(Into::into).collect(),
        );
    }

    /// The ordered transitions possible from a state.
    ///
    /// States absent from the table answer with an empty slice.
    pub fn possible(&self, state: &str) -> &[Symbol] {
        self.map.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a transition appears in the list for a state.
    pub fn allows(&self, state: &str, transition: &str) -> bool {
        self.possible(state).iter().any(|t| t == transition)
    }

    /// Number of states with an entry.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, I, S> FromIterator<(K, I)> for TransitionTable
where
    K: Into<Symbol>,
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut table = TransitionTable::new();
        for (state, transitions) in iter {
            table.insert(state, transitions);
        }
        table
    }
}
