use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The variable store of one session.
///
/// Maps names to values. Assigning a name that already exists overwrites it;
/// reading a name that was never assigned returns `None` instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// # Example
    /// ```
    /// use cxcalc::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Real(1.0));
    /// env.set("x", Value::Real(2.0));
    ///
    /// assert_eq!(env.get("x"), Some(Value::Real(2.0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        let mut entries = self.variables
                              .iter()
                              .map(|(name, value)| (name.as_str(), *value))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
