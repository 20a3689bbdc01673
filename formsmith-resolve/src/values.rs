//! Value sources for one resolution pass.
//!
//! All three sources are built by the host before resolution begins and are
//! read-only snapshots from the resolver's perspective. The transient input
//! snapshot is passed explicitly and scoped to one request, never held as
//! ambient process state.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

/// Persisted/editing values for a whole form, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    values: IndexMap<String, String>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Set (create or replace) a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}

/// Request-scoped snapshot of resubmitted-but-not-yet-persisted values.
///
/// Keyed by field name only; a descriptor's `value_lookup` alias never
/// applies here. Presence is the signal: an entry holding an empty string
/// still wins over the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransientInputs {
    values: IndexMap<String, String>,
}

impl TransientInputs {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Record a resubmitted value under the field's own name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a resubmitted value by field name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for TransientInputs {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (name, value) in iter {
            inputs.set(name, value);
        }
        inputs
    }
}

/// A per-field display transformation over a raw resubmitted value.
pub type Mutator = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Explicit registration of per-field mutators, keyed by field name.
///
/// Registered by the concrete form at construction time; looked up by the
/// resolver when a transient value is present. Absence is not an error.
#[derive(Default)]
pub struct MutatorSet {
    mutators: HashMap<String, Mutator>,
}

impl MutatorSet {
    pub fn new() -> Self {
        Self {
            mutators: HashMap::new(),
        }
    }

    /// Register a mutator for a field, chained builder-style.
    pub fn with(
        mut self,
        name: impl Into<String>,
        mutator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.register(name, mutator);
        self
    }

    /// Register (create or replace) a mutator for a field.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        mutator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) {
        self.mutators.insert(name.into(), Box::new(mutator));
    }

    /// Look up the mutator registered for a field.
    pub fn get(&self, name: &str) -> Option<&Mutator> {
        self.mutators.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.mutators.is_empty()
    }
}

impl fmt::Debug for MutatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutatorSet")
            .field("fields", &self.mutators.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_map_set_and_get() {
        let mut values = ValueMap::new();
        values.set("name", "John Doe");

        assert_eq!(values.get("name"), Some("John Doe"));
        assert_eq!(values.get("email"), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn value_map_from_iter_preserves_order() {
        let values = ValueMap::from_iter([("b", "2"), ("a", "1")]);
        assert_eq!(values.get("b"), Some("2"));
        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn transient_inputs_presence_includes_empty_values() {
        let mut inputs = TransientInputs::new();
        assert_eq!(inputs.get("email"), None);

        inputs.set("email", "");
        assert_eq!(inputs.get("email"), Some(""));
    }

    #[test]
    fn mutator_set_registration_and_dispatch() {
        let mutators = MutatorSet::new().with("email", |raw: &str| raw.to_lowercase());

        let mutator = mutators.get("email").unwrap();
        assert_eq!(mutator("John@Example.ORG"), "john@example.org");
        assert!(mutators.get("name").is_none());
    }

    #[test]
    fn mutator_set_replace_on_reregister() {
        let mut mutators = MutatorSet::new();
        mutators.register("email", |_| "first".to_string());
        mutators.register("email", |_| "second".to_string());

        assert_eq!(mutators.get("email").unwrap()("x"), "second");
    }

    #[test]
    fn mutator_set_debug_lists_field_names() {
        let mutators = MutatorSet::new().with("email", |raw: &str| raw.to_string());
        let debug = format!("{mutators:?}");
        assert!(debug.contains("email"));
    }
}
