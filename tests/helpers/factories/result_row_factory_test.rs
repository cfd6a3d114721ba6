use super::ResultRowFactory;
use crate::engine::aggregate::{AggState, MetricValue};

#[test]
fn create_emits_in_memory_state() {
    let row = ResultRowFactory::new().create();
    assert_eq!(
        row.metric("avg_price"),
        Some(&MetricValue::State(AggState::Avg { sum: 30, count: 3 }))
    );
}

#[test]
fn encoded_emits_serialized_state() {
    let row = ResultRowFactory::new().encoded().create();
    assert!(matches!(row.metric("rows"), Some(MetricValue::Encoded(_))));
}

#[test]
fn create_list_scales_counts_and_timestamps() {
    let rows = ResultRowFactory::new().create_list(3);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[2].metric("rows"),
        Some(&MetricValue::State(AggState::CountAll { count: 3 }))
    );
    assert!(rows[0].timestamp < rows[1].timestamp);
}
