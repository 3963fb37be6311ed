//! Identifier types for states and actions.
//!
//! Search itself never looks at these; they let collaborators (for example a
//! reinforcement-learning layer keyed by transition) tie an [`crate::Action`]
//! back to the states it connects.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier for a state in a domain.
///
/// Typically a canonical string encoding of the state, such as a board label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(String);

impl StateId {
    /// Create a new state identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use statesearch::identifiers::StateId;
    ///
    /// let state = StateId::new("X.O......_X");
    /// assert_eq!(state.as_str(), "X.O......_X");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Numeric identifier of an action, unique within one [`ActionIdAllocator`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActionId(u64);

impl ActionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing [`ActionId`]s.
///
/// Owned by whichever component constructs actions, so two domains (or two
/// tests) never share a counter.
///
/// ```
/// use statesearch::identifiers::ActionIdAllocator;
///
/// let mut ids = ActionIdAllocator::new();
/// assert_eq!(ids.allocate().value(), 1);
/// assert_eq!(ids.allocate().value(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActionIdAllocator {
    last: u64,
}

impl ActionIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last`, e.g. when resuming from persisted actions.
    pub fn starting_after(last: ActionId) -> Self {
        Self { last: last.0 }
    }

    pub fn allocate(&mut self) -> ActionId {
        self.last += 1;
        ActionId(self.last)
    }

    /// Number of ids handed out so far (for a fresh allocator).
    pub fn issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocators_are_independent() {
        let mut a = ActionIdAllocator::new();
        let mut b = ActionIdAllocator::new();
        a.allocate();
        a.allocate();
        assert_eq!(b.allocate(), ActionId::new(1));
        assert_eq!(a.allocate(), ActionId::new(3));
    }

    #[test]
    fn resumed_allocator_continues_after_last_id() {
        let mut ids = ActionIdAllocator::starting_after(ActionId::new(41));
        assert_eq!(ids.allocate().value(), 42);
    }

    #[test]
    fn state_id_compares_with_str() {
        let id = StateId::from("A");
        assert!(id == "A");
        assert_eq!(id.to_string(), "A");
    }
}
