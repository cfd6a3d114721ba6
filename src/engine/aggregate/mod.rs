pub mod factory;
pub mod manipulation;
pub mod metric;
pub mod state;


pub use factory::{AggregateOpSpec, AggregatorFactory};
pub use manipulation::{DeserializeAndFinalize, FinalizeComputation, MetricManipulationFn};
pub use metric::MetricValue;
pub use state::AggState;
