use std::sync::Arc;

use crate::engine::aggregate::MetricManipulationFn;
use crate::engine::errors::FinalizeError;
use crate::engine::query::Query;
use crate::engine::result::{ResultElement, Sequence};

/// Element transform bound to one query's aggregator configuration.
pub type ElementTransform<T> = Arc<dyn Fn(T) -> Result<T, FinalizeError> + Send + Sync>;

/// Anything that can answer a query with a lazy stream of results.
pub trait QueryRunner<T>: Send + Sync {
    fn run(&self, query: &Query) -> Sequence<ResultElement<T>>;
}

/// Builds query-specific transforms for result elements of type `T`.
pub trait QueryToolChest<T>: Send + Sync {
    fn make_metric_manipulator_fn(
        &self,
        query: &Query,
        manipulator: Arc<dyn MetricManipulationFn>,
    ) -> ElementTransform<T>;
}
