//! The binding environment.
//!
//! A single flat map from name to value. There is no parent chain: the
//! language has exactly one scope per session.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Name-to-value bindings for one evaluation session.
///
/// Keys are unique and the last write wins. Passed by `&mut` to every
/// resolution, never stored in a global.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    storage: FxHashMap<String, Value>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Scope {
            storage: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding.
    ///
    /// Returns the stored value so an assignment can be used as an expression.
    #[inline]
    pub fn set_symbol(&mut self, name: &str, value: Value) -> Value {
        tracing::trace!(name, %value, "set symbol");
        if let Some(slot) = self.storage.get_mut(name) {
            *slot = value;
        } else {
            self.storage.insert(name.to_string(), value);
        }
        value
    }

    /// Look up a binding.
    ///
    /// `None` means the name was never bound. A binding to `0` is `Some`.
    #[inline]
    pub fn get_symbol(&self, name: &str) -> Option<Value> {
        let found = self.storage.get(name).copied();
        tracing::trace!(name, bound = found.is_some(), "get symbol");
        found
    }

    pub fn contains(&self, name: &str) -> bool {
        self.storage.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// All bindings, sorted by name.
    pub fn bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings: Vec<_> = self
            .storage
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

#[cfg(test)]
mod tests;
