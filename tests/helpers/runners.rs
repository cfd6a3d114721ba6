use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::engine::aggregate::{AggregateOpSpec, AggregatorFactory, MetricManipulationFn, MetricValue};
use crate::engine::errors::FinalizeError;
use crate::engine::query::Query;
use crate::engine::result::{ResultElement, Sequence};
use crate::engine::runner::{ElementTransform, QueryRunner, QueryToolChest};

/// Runner wrapper that remembers every query it was asked to run.
pub struct RecordingRunner<T> {
    base: Arc<dyn QueryRunner<T>>,
    seen: Mutex<Vec<Query>>,
}

impl<T> RecordingRunner<T> {
    pub fn new(base: Arc<dyn QueryRunner<T>>) -> Self {
        Self {
            base,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<Query> {
        self.seen.lock().unwrap().clone()
    }
}

impl<T: Send + 'static> QueryRunner<T> for RecordingRunner<T> {
    fn run(&self, query: &Query) -> Sequence<ResultElement<T>> {
        self.seen.lock().unwrap().push(query.clone());
        self.base.run(query)
    }
}

/// Element that records how many times it went through a finalizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Marked {
    pub id: u32,
    pub marks: u32,
}

impl Marked {
    pub fn new(id: u32) -> Self {
        Self { id, marks: 0 }
    }

    pub fn list(count: u32) -> Vec<Marked> {
        (1..=count).map(Marked::new).collect()
    }
}

/// Tool chest for `Marked` elements that counts lookups and applications.
#[derive(Default)]
pub struct CountingToolChest {
    lookups: AtomicUsize,
    applied: Arc<Mutex<Vec<u32>>>,
    deserializing: Mutex<Vec<bool>>,
}

impl CountingToolChest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Ids of finalized elements, in application order.
    pub fn applied(&self) -> Vec<u32> {
        self.applied.lock().unwrap().clone()
    }

    /// For each lookup, whether the supplied policy deserializes.
    pub fn deserializing(&self) -> Vec<bool> {
        self.deserializing.lock().unwrap().clone()
    }
}

impl QueryToolChest<Marked> for CountingToolChest {
    fn make_metric_manipulator_fn(
        &self,
        _query: &Query,
        manipulator: Arc<dyn MetricManipulationFn>,
    ) -> ElementTransform<Marked> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        // Only a deserializing policy accepts a serialized probe.
        let probe = AggregatorFactory::new("probe", AggregateOpSpec::CountAll);
        let encoded = MetricValue::Encoded(json!({"kind": "count_all", "count": 1}));
        self.deserializing
            .lock()
            .unwrap()
            .push(manipulator.manipulate(&probe, encoded).is_ok());

        let applied = Arc::clone(&self.applied);
        Arc::new(move |element: Marked| -> Result<Marked, FinalizeError> {
            applied.lock().unwrap().push(element.id);
            Ok(Marked {
                id: element.id,
                marks: element.marks + 1,
            })
        })
    }
}
