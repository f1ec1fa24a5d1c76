//! Property lookup on structured values.

use serde_yaml::{Mapping, Value};

/// Lookup operations a value must support to be navigated.
///
/// An empty `name` on an indexed or keyed lookup addresses the value itself,
/// so `[0]` indexes the current value rather than one of its attributes.
pub trait Navigable {
    /// Returns the attribute called `name`.
    fn get_simple(&self, name: &str) -> Option<&Self>;

    /// Returns element `index` of the attribute called `name`.
    fn get_indexed(&self, name: &str, index: usize) -> Option<&Self>;

    /// Returns the entry for `key` in the attribute called `name`.
    fn get_keyed(&self, name: &str, key: &str) -> Option<&Self>;
}

impl Navigable for Value {
    fn get_simple(&self, name: &str) -> Option<&Self> {
        match untagged(self) {
            Value::Mapping(map) => lookup(map, name),
            _ => None,
        }
    }

    fn get_indexed(&self, name: &str, index: usize) -> Option<&Self> {
        match untagged(member(self, name)?) {
            Value::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    fn get_keyed(&self, name: &str, key: &str) -> Option<&Self> {
        match untagged(member(self, name)?) {
            Value::Mapping(map) => lookup(map, key),
            _ => None,
        }
    }
}

fn member<'v>(value: &'v Value, name: &str) -> Option<&'v Value> {
    if name.is_empty() {
        Some(value)
    } else {
        value.get_simple(name)
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Finds `key` in a mapping, falling back to non-string scalar keys whose
/// rendering matches (`1: one` is found by key `1`).
fn lookup<'v>(map: &'v Mapping, key: &str) -> Option<&'v Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(candidate, _)| scalar_matches(candidate, key))
            .map(|(_, value)| value)
    })
}

fn scalar_matches(candidate: &Value, key: &str) -> bool {
    match untagged(candidate) {
        Value::Number(n) => n.to_string() == key,
        Value::Bool(b) => b.to_string() == key,
        Value::Null => key == "null" || key == "~",
        _ => false,
    }
}
