use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::aggregate::AggregatorFactory;
use crate::engine::query::context::QueryContext;

/// Immutable description of one query as seen by the runner chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub data_source: String,
    #[serde(default)]
    pub intervals: Vec<String>,
    #[serde(default)]
    pub aggregations: Vec<AggregatorFactory>,
    #[serde(default)]
    pub context: QueryContext,
}

impl Query {
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            intervals: Vec::new(),
            aggregations: Vec::new(),
            context: QueryContext::new(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.intervals.push(interval.into());
        self
    }

    pub fn with_aggregation(mut self, factory: AggregatorFactory) -> Self {
        self.aggregations.push(factory);
        self
    }

    pub fn with_context(mut self, context: QueryContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    pub fn aggregations(&self) -> &[AggregatorFactory] {
        &self.aggregations
    }

    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn context_value_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.context.get_or(key, default)
    }

    /// Returns a copy of this query whose context has the given keys replaced.
    pub fn with_overridden_context<K, V, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            data_source: self.data_source.clone(),
            intervals: self.intervals.clone(),
            aggregations: self.aggregations.clone(),
            context: self.context.with_overrides(overrides),
        }
    }
}
