use std::sync::Arc;

use tracing::trace;

use crate::engine::query::Query;
use crate::engine::result::{ResultElement, Sequence};
use crate::engine::runner::traits::QueryRunner;

/// Leaf runner serving a fixed set of rows as flat results.
pub struct InMemoryQueryRunner<T> {
    rows: Arc<Vec<T>>,
}

impl<T> InMemoryQueryRunner<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> QueryRunner<T> for InMemoryQueryRunner<T> {
    fn run(&self, query: &Query) -> Sequence<ResultElement<T>> {
        trace!(
            target: "finalize_runner::in_memory",
            data_source = %query.data_source,
            rows = self.rows.len(),
            "Serving in-memory rows"
        );
        let rows = Arc::clone(&self.rows);
        Sequence::new((0..rows.len()).map(move |idx| Ok(ResultElement::Flat(rows[idx].clone()))))
    }
}
