use serde::{Deserialize, Serialize};

use crate::engine::aggregate::metric::MetricValue;
use crate::engine::aggregate::state::AggState;
use crate::engine::errors::FinalizeError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AggregateOpSpec {
    CountAll,
    CountUnique { field: String },
    Total { field: String },
    Avg { field: String },
    Min { field: String },
    Max { field: String },
}

impl AggregateOpSpec {
    pub fn accepts(&self, state: &AggState) -> bool {
        matches!(
            (self, state),
            (AggregateOpSpec::CountAll, AggState::CountAll { .. })
                | (AggregateOpSpec::CountUnique { .. }, AggState::CountUnique { .. })
                | (AggregateOpSpec::Total { .. }, AggState::Sum { .. })
                | (AggregateOpSpec::Avg { .. }, AggState::Avg { .. })
                | (AggregateOpSpec::Min { .. }, AggState::Min { .. })
                | (AggregateOpSpec::Max { .. }, AggState::Max { .. })
        )
    }
}

/// Named aggregator bound to one metric slot of a result element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorFactory {
    pub name: String,
    pub op: AggregateOpSpec,
}

impl AggregatorFactory {
    pub fn new(name: impl Into<String>, op: AggregateOpSpec) -> Self {
        Self {
            name: name.into(),
            op,
        }
    }

    /// Restores in-memory state from its serialized form. Values that are
    /// not serialized pass through unchanged.
    pub fn deserialize(&self, value: MetricValue) -> Result<MetricValue, FinalizeError> {
        match value {
            MetricValue::Encoded(raw) => serde_json::from_value::<AggState>(raw)
                .map(MetricValue::State)
                .map_err(|source| FinalizeError::Deserialize {
                    aggregator: self.name.clone(),
                    source,
                }),
            other => Ok(other),
        }
    }

    pub fn finalize_computation(&self, value: MetricValue) -> Result<MetricValue, FinalizeError> {
        match value {
            MetricValue::State(state) => {
                if !self.op.accepts(&state) {
                    return Err(FinalizeError::finalize(
                        &self.name,
                        format!("state of kind {} does not match {:?}", state.kind(), self.op),
                    ));
                }
                Ok(MetricValue::Final(state.finalize()))
            }
            MetricValue::Encoded(_) => Err(FinalizeError::finalize(
                &self.name,
                "intermediate state is still serialized",
            )),
            MetricValue::Final(_) => Err(FinalizeError::finalize(
                &self.name,
                "value is already finalized",
            )),
        }
    }
}
