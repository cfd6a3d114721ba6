use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::engine::aggregate::MetricValue;

/// Flat result element: one timestamped bucket of named metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub timestamp: DateTime<Utc>,
    pub metrics: BTreeMap<String, MetricValue>,
}

impl ResultRow {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(name.into(), value.into());
        self
    }

    pub fn metric(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }
}
