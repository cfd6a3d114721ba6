use chrono::{DateTime, Utc};

use crate::engine::result::by_segment::{BySegmentResultValue, TimestampedResult};
use crate::engine::result::sequence::Sequence;

/// One element of a runner's output stream.
#[derive(Debug)]
pub enum ResultElement<T> {
    Flat(T),
    BySegment(TimestampedResult<BySegmentResultValue<T>>),
}

impl<T> ResultElement<T> {
    pub fn by_segment(
        timestamp: DateTime<Utc>,
        segment_id: impl Into<String>,
        interval: impl Into<String>,
        results: Sequence<T>,
    ) -> Self {
        ResultElement::BySegment(TimestampedResult::new(
            timestamp,
            BySegmentResultValue::new(results, segment_id, interval),
        ))
    }

    pub fn is_by_segment(&self) -> bool {
        matches!(self, ResultElement::BySegment(_))
    }

    pub fn into_flat(self) -> Option<T> {
        match self {
            ResultElement::Flat(value) => Some(value),
            ResultElement::BySegment(_) => None,
        }
    }

    pub fn into_by_segment(self) -> Option<TimestampedResult<BySegmentResultValue<T>>> {
        match self {
            ResultElement::BySegment(group) => Some(group),
            ResultElement::Flat(_) => None,
        }
    }
}
