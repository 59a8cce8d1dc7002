//! String-keyed dictionary of container values.
//!
//! The motivating use case for the container: a parameter map able to hold
//! arbitrary member types under string keys, with entries that can be
//! combined through the forwarded operators. Thin layer over the map; all
//! dispatch semantics live in the value engine.

use ahash::RandomState;
use hashbrown::HashMap;

use crate::{FromValue, Value, ValueError};

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

fn fast_map_new<K: Eq + std::hash::Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(fast_hasher())
}

fn fast_map_with_capacity<K: Eq + std::hash::Hash, V>(cap: usize) -> FastHashMap<K, V> {
    HashMap::with_capacity_and_hasher(cap, fast_hasher())
}

/// A dictionary from string keys to polymorphic values.
#[derive(Clone, Debug)]
pub struct Dict {
    entries: FastHashMap<String, Value>,
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl Dict {
    pub fn new() -> Self {
        Dict {
            entries: fast_map_new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Dict {
            entries: fast_map_with_capacity(cap),
        }
    }

    /// Insert any allowed payload type (or an existing value), returning the
    /// previous entry if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Look up a key and convert the entry out to a native `T` in one step.
    pub fn get_native<T: FromValue>(&self, key: &str) -> Option<Result<T, ValueError>> {
        self.entries.get(key).map(Value::to_native)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}
