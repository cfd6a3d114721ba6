use crate::engine::aggregate::factory::AggregatorFactory;
use crate::engine::aggregate::metric::MetricValue;
use crate::engine::errors::FinalizeError;

/// Per-metric policy handed to a tool chest when it builds an element transform.
pub trait MetricManipulationFn: Send + Sync {
    fn manipulate(
        &self,
        factory: &AggregatorFactory,
        value: MetricValue,
    ) -> Result<MetricValue, FinalizeError>;
}

/// Finalizes state that is already in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinalizeComputation;

impl MetricManipulationFn for FinalizeComputation {
    fn manipulate(
        &self,
        factory: &AggregatorFactory,
        value: MetricValue,
    ) -> Result<MetricValue, FinalizeError> {
        factory.finalize_computation(value)
    }
}

/// Deserializes first, for state that may have crossed a network hop.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeserializeAndFinalize;

impl MetricManipulationFn for DeserializeAndFinalize {
    fn manipulate(
        &self,
        factory: &AggregatorFactory,
        value: MetricValue,
    ) -> Result<MetricValue, FinalizeError> {
        factory.finalize_computation(factory.deserialize(value)?)
    }
}
