//! Set-membership toggling shared by multi-select fields, tab switchers and
//! category filters.
//!
//! A [`Selection`] is an unordered set of string keys. Toggling a key flips
//! its membership, so toggling the same key twice always restores the set.
//! Display order is never taken from the set itself: callers resolve it
//! against their canonical candidate list with [`Selection::ordered`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Unordered set of selected keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding exactly one key
    pub fn single(key: impl Into<String>) -> Self {
        let mut keys = BTreeSet::new();
        keys.insert(key.into());
        Self { keys }
    }

    /// Return a copy with `key` removed if present, or added if absent
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    /// Flip membership of `key` in place
    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    /// Replace the whole selection with `key` (single-select semantics)
    pub fn select_only(&mut self, key: &str) {
        self.keys.clear();
        self.keys.insert(key.to_string());
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Selected keys in the order they appear in `candidates`.
    ///
    /// Keys that are selected but not listed in `candidates` are appended
    /// afterwards in lexical order so nothing silently disappears.
    pub fn ordered<'a>(&'a self, candidates: &[&'a str]) -> Vec<&'a str> {
        let mut out: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|c| self.keys.contains(*c))
            .collect();
        out.extend(
            self.keys
                .iter()
                .map(String::as_str)
                .filter(|k| !candidates.contains(k)),
        );
        out
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pure toggle over a selection
pub fn toggle(set: &Selection, key: &str) -> Selection {
    set.toggled(key)
}

/// Pure membership test
pub fn is_selected(set: &Selection, key: &str) -> bool {
    set.is_selected(key)
}
