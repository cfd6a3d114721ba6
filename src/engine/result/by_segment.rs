use chrono::{DateTime, Utc};

use crate::engine::result::sequence::Sequence;

#[derive(Debug)]
pub struct TimestampedResult<V> {
    pub timestamp: DateTime<Utc>,
    pub value: V,
}

impl<V> TimestampedResult<V> {
    pub fn new(timestamp: DateTime<Utc>, value: V) -> Self {
        Self { timestamp, value }
    }
}

/// Results kept grouped by the segment that produced them.
#[derive(Debug)]
pub struct BySegmentResultValue<T> {
    pub results: Sequence<T>,
    pub segment_id: String,
    pub interval: String,
}

impl<T> BySegmentResultValue<T> {
    pub fn new(results: Sequence<T>, segment_id: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            results,
            segment_id: segment_id.into(),
            interval: interval.into(),
        }
    }
}
