use std::collections::HashMap;

use crate::value::Value;

/// Mapping from variable names to values, treated as immutable during
/// evaluation: a statement never updates the mapping it was given, it
/// returns a fresh one with the affected binding changed and everything
/// else preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Snapshot with one binding added or overwritten.
    pub fn with(&self, name: impl Into<String>, value: Value) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), value);
        Environment { bindings }
    }

    /// In-place binding, for building an initial environment before the
    /// first evaluation.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().collect(),
        }
    }
}
