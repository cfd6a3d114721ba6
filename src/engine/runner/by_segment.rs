use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::engine::query::Query;
use crate::engine::result::{ResultElement, Sequence};
use crate::engine::runner::traits::QueryRunner;

/// Per-segment decorator. In by-segment mode it folds everything the inner
/// runner produces into one grouped element tagged with the segment's
/// provenance; otherwise results pass through.
///
/// Groups already produced further down are flattened into this one: their
/// rows are kept in order, but their segment id, interval and timestamp are
/// replaced by this runner's, so every grouped element carries exactly one
/// level of provenance.
pub struct BySegmentQueryRunner<T> {
    base: Arc<dyn QueryRunner<T>>,
    segment_id: String,
    interval: String,
    timestamp: DateTime<Utc>,
}

impl<T> BySegmentQueryRunner<T> {
    pub fn new(
        base: Arc<dyn QueryRunner<T>>,
        segment_id: impl Into<String>,
        interval: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            base,
            segment_id: segment_id.into(),
            interval: interval.into(),
            timestamp,
        }
    }

    pub fn segment_id(&self) -> &str {
        &self.segment_id
    }
}

impl<T: Send + 'static> QueryRunner<T> for BySegmentQueryRunner<T> {
    fn run(&self, query: &Query) -> Sequence<ResultElement<T>> {
        let results = self.base.run(query);
        if !query.context().by_segment() {
            return results;
        }

        debug!(
            target: "finalize_runner::by_segment",
            segment_id = %self.segment_id,
            interval = %self.interval,
            "Grouping results by segment"
        );

        let flattened = results.flat_map(|element| match element {
            ResultElement::Flat(value) => Sequence::new(std::iter::once(Ok(value))),
            ResultElement::BySegment(group) => group.value.results,
        });

        Sequence::new(std::iter::once(Ok(ResultElement::by_segment(
            self.timestamp,
            self.segment_id.clone(),
            self.interval.clone(),
            flattened,
        ))))
    }
}
