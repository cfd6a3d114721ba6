use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FINALIZE_KEY: &str = "finalize";
pub const BY_SEGMENT_KEY: &str = "bySegment";

/// Request-scoped context carried alongside a query.
///
/// Values are never mutated in place: every override produces a new context,
/// so a caller can hand the same query to sibling runners concurrently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryContext {
    values: BTreeMap<String, Value>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.values.get(key).unwrap_or(default)
    }

    /// Reads a flag leniently: only `true` or a case-insensitive `"true"`
    /// count as set. Falls back to `default` when the key is absent.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            None => default,
            Some(value) => parse_bool(value),
        }
    }

    /// Whether results still need finalizing at this level.
    pub fn finalize(&self) -> bool {
        self.get_bool(FINALIZE_KEY, true)
    }

    pub fn by_segment(&self) -> bool {
        self.get_bool(BY_SEGMENT_KEY, false)
    }

    pub fn with_overrides<K, V, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut values = self.values.clone();
        for (key, value) in overrides {
            values.insert(key.into(), value.into());
        }
        Self { values }
    }

    pub fn with_finalize(&self, finalize: bool) -> Self {
        self.with_overrides([(FINALIZE_KEY, finalize.to_string())])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryContext::new().with_overrides(iter)
    }
}

fn parse_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
