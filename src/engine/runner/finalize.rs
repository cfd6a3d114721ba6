use std::sync::Arc;

use tracing::{debug, trace};

use crate::engine::aggregate::{DeserializeAndFinalize, FinalizeComputation, MetricManipulationFn};
use crate::engine::errors::FinalizeError;
use crate::engine::query::{FINALIZE_KEY, Query};
use crate::engine::result::{BySegmentResultValue, ResultElement, Sequence, TimestampedResult};
use crate::engine::runner::traits::{ElementTransform, QueryRunner, QueryToolChest};

/// Decorator that turns partial aggregate state into final values.
///
/// Finalization happens once per query no matter how many of these runners
/// are stacked: the outermost one that sees `finalize` unset or true does the
/// work and forwards the query downstream with `finalize=false`, so every
/// nested instance passes results through untouched.
pub struct FinalizingRunner<T> {
    base: Arc<dyn QueryRunner<T>>,
    tool_chest: Arc<dyn QueryToolChest<T>>,
}

impl<T> FinalizingRunner<T> {
    pub fn new(base: Arc<dyn QueryRunner<T>>, tool_chest: Arc<dyn QueryToolChest<T>>) -> Self {
        Self { base, tool_chest }
    }
}

impl<T: Send + 'static> QueryRunner<T> for FinalizingRunner<T> {
    fn run(&self, query: &Query) -> Sequence<ResultElement<T>> {
        let ctx = query.context();
        if !ctx.finalize() {
            trace!(
                target: "finalize_runner::finalize",
                data_source = %query.data_source,
                "Finalization disabled for this level, passing results through"
            );
            return self.base.run(query);
        }

        let by_segment = ctx.by_segment();
        debug!(
            target: "finalize_runner::finalize",
            data_source = %query.data_source,
            by_segment,
            aggregations = query.aggregations().len(),
            "Finalizing query results"
        );

        let finalizer = self
            .tool_chest
            .make_metric_manipulator_fn(query, manipulator_for(by_segment));
        let downstream = query.with_overridden_context([(FINALIZE_KEY, "false")]);

        self.base
            .run(&downstream)
            .map(move |element| finalize_element(&finalizer, element))
    }
}

/// Grouped results may have crossed a serialization boundary, so they are
/// deserialized before finalizing.
fn manipulator_for(by_segment: bool) -> Arc<dyn MetricManipulationFn> {
    if by_segment {
        Arc::new(DeserializeAndFinalize)
    } else {
        Arc::new(FinalizeComputation)
    }
}

fn finalize_element<T: Send + 'static>(
    finalizer: &ElementTransform<T>,
    element: ResultElement<T>,
) -> Result<ResultElement<T>, FinalizeError> {
    match element {
        ResultElement::Flat(value) => finalizer(value)
            .map(ResultElement::Flat)
            .inspect_err(FinalizeError::log_error),
        ResultElement::BySegment(TimestampedResult { timestamp, value }) => {
            let BySegmentResultValue {
                results,
                segment_id,
                interval,
            } = value;
            let finalizer = Arc::clone(finalizer);
            let results =
                results.map(move |inner| finalizer(inner).inspect_err(FinalizeError::log_error));
            Ok(ResultElement::BySegment(TimestampedResult::new(
                timestamp,
                BySegmentResultValue::new(results, segment_id, interval),
            )))
        }
    }
}
