//! Render context
//!
//! The run-time key/value data a template is rendered against. Values are
//! JSON values (strings, numbers, booleans, nested objects, arrays); the
//! reserved key `items` holds the array consumed by items-loop lines.
//!
//! A context is created fresh per print call and never shared across calls.

use serde_json::{Map, Value};

/// Key/value data for one render call
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Map<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a flat key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Flat lookup, no path traversal
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Dot-path lookup (`a.b.c`) by recursive descent into nested objects
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.values.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// The underlying map, for overlaying per-item contexts
    pub(crate) fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub(crate) fn from_values(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// Stringify a context value for substitution and condition checks
///
/// Strings are taken as-is, null becomes empty, everything else uses its
/// JSON text (`3`, `true`, ...).
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
