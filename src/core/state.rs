//! Opaque identifiers for states and transitions.
//!
//! The machine never enumerates legal states; states and transitions are
//! both plain comparable names, so one identifier type serves for both.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An opaque, comparable, string-like identifier.
///
/// `Symbol` names both states and transitions. The machine attaches no
/// meaning to the text beyond equality and display; transitioning to a
/// state named after the transition itself is perfectly valid (and is
/// the default behavior of table-free usage).
///
/// # Example
///
/// ```rust
/// use transom::core::Symbol;
///
/// let state = Symbol::from("draft");
/// assert_eq!(state, "draft");
/// assert_eq!(state.as_str(), "draft");
/// assert_eq!(state.to_string(), "draft");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// View the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol(name.to_string())
    }
}

impl From<&Symbol> for Symbol {
    fn from(name: &Symbol) -> Self {
        name.clone()
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows `HashMap<Symbol, _>` lookups by `&str`.
impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Symbol> for str {
    fn eq(&self, other: &Symbol) -> bool {
        self == other.0
    }
}

impl PartialEq<Symbol> for &str {
    fn eq(&self, other: &Symbol) -> bool {
        *self == other.0
    }
}
