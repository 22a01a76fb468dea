use crate::expr::Value;
use ahash::AHashMap;

/// The mutable variable store for one execution run.
///
/// Created empty when a run starts, mutated by `process`/`input` nodes and
/// loop clauses, read by conditions and `output` nodes, and discarded with
/// the session. A context is owned by exactly one [`Session`] and is never
/// shared between runs.
///
/// [`Session`]: crate::interpreter::Session
#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: AHashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over variable bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }
}
