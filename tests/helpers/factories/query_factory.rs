use crate::engine::aggregate::{AggregateOpSpec, AggregatorFactory};
use crate::engine::query::{BY_SEGMENT_KEY, FINALIZE_KEY, Query};
use serde_json::Value;

pub struct QueryFactory {
    inner: Query,
}

impl QueryFactory {
    pub fn new() -> Self {
        let inner = Query::new("orders")
            .with_interval("2020-01-01/2021-01-01")
            .with_aggregation(AggregatorFactory::new("rows", AggregateOpSpec::CountAll))
            .with_aggregation(AggregatorFactory::new(
                "avg_price",
                AggregateOpSpec::Avg {
                    field: "price".into(),
                },
            ))
            .with_aggregation(AggregatorFactory::new(
                "total_amount",
                AggregateOpSpec::Total {
                    field: "amount".into(),
                },
            ));
        Self { inner }
    }

    pub fn with_data_source(mut self, value: &str) -> Self {
        self.inner.data_source = value.to_string();
        self
    }

    pub fn with_aggregations(mut self, aggregations: Vec<AggregatorFactory>) -> Self {
        self.inner.aggregations = aggregations;
        self
    }

    pub fn with_context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.inner.context = self.inner.context.with_overrides([(key, value.into())]);
        self
    }

    pub fn with_finalize(self, value: &str) -> Self {
        self.with_context(FINALIZE_KEY, value)
    }

    pub fn with_by_segment(self, value: &str) -> Self {
        self.with_context(BY_SEGMENT_KEY, value)
    }

    pub fn create(self) -> Query {
        self.inner
    }
}
