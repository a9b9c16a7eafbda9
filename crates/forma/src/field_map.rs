//! Field maps.
//!
//! [`Fields`] is the "field name → value" mapping handed to generated
//! constructors. Insertion order is kept so diagnostics and serialized output
//! follow the order the caller used.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::convert::IntoValue;
use crate::value::Value;

/// Insertion-ordered map of field names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(IndexMap<String, Value>);

impl Fields {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl IntoValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a value, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl IntoValue) -> Option<Value> {
        self.0.insert(name.into(), value.into_value())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a value, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into_value()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: IntoValue> Extend<(K, V)> for Fields {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, Value>> for Fields {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl From<BTreeMap<String, Value>> for Fields {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<HashMap<String, Value>> for Fields {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: IntoValue, const N: usize> From<[(K, V); N]> for Fields {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Builds a [`Fields`] map.
///
/// ```rust
/// let fields = forma::fields! {
///     "year" => 5,
///     "make" => "Volvo",
/// };
/// assert_eq!(fields.len(), 2);
/// assert_eq!(forma::fields!().len(), 0);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($name, $value);)+
        fields
    }};
}
