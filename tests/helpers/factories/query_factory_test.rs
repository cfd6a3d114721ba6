use super::QueryFactory;
use serde_json::json;

#[test]
fn default_query_finalizes_flat_results() {
    let query = QueryFactory::new().create();
    assert_eq!(query.data_source, "orders");
    assert_eq!(query.aggregations().len(), 3);
    assert!(query.context().finalize());
    assert!(!query.context().by_segment());
}

#[test]
fn flag_helpers_store_string_values() {
    let query = QueryFactory::new()
        .with_finalize("false")
        .with_by_segment("true")
        .create();
    assert_eq!(query.context_value("finalize"), Some(&json!("false")));
    assert_eq!(query.context_value("bySegment"), Some(&json!("true")));
}
