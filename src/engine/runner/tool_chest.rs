use std::sync::Arc;

use crate::engine::aggregate::{AggregatorFactory, MetricManipulationFn};
use crate::engine::errors::FinalizeError;
use crate::engine::query::Query;
use crate::engine::result::ResultRow;
use crate::engine::runner::traits::{ElementTransform, QueryToolChest};

/// Tool chest for timestamped metric rows.
///
/// The transform rewrites every metric named by one of the query's
/// aggregators; other entries in the row are left as they are.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregateToolChest;

impl QueryToolChest<ResultRow> for AggregateToolChest {
    fn make_metric_manipulator_fn(
        &self,
        query: &Query,
        manipulator: Arc<dyn MetricManipulationFn>,
    ) -> ElementTransform<ResultRow> {
        let aggregations: Arc<[AggregatorFactory]> = query.aggregations().into();
        Arc::new(move |mut row: ResultRow| -> Result<ResultRow, FinalizeError> {
            for factory in aggregations.iter() {
                if let Some(value) = row.metrics.remove(&factory.name) {
                    let value = manipulator.manipulate(factory, value)?;
                    row.metrics.insert(factory.name.clone(), value);
                }
            }
            Ok(row)
        })
    }
}
