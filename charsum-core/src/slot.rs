//! Slot storage
//!
//! A slot is either empty or holds one key/value pair. Using an explicit
//! variant keeps empty-string keys distinguishable from free slots.

use std::fmt;

/// Placeholder printed for both fields of an empty slot
pub const EMPTY_PLACEHOLDER: &str = "null";

/// One position in the table's backing storage
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied { key: String, value: String },
}

impl Slot {
    /// Create an occupied slot
    pub fn occupied(key: impl Into<String>, value: impl Into<String>) -> Self {
        Slot::Occupied {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Stored key, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            Slot::Empty => None,
        }
    }

    /// Stored value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    /// Move the pair out, leaving the slot empty
    pub(crate) fn take(&mut self) -> Option<(String, String)> {
        match std::mem::take(self) {
            Slot::Occupied { key, value } => Some((key, value)),
            Slot::Empty => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key().unwrap_or(EMPTY_PLACEHOLDER);
        let value = self.value().unwrap_or(EMPTY_PLACEHOLDER);
        write!(f, "Key:   {}  Value: {}", key, value)
    }
}
