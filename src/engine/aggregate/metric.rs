use crate::engine::aggregate::state::AggState;
use crate::engine::types::ScalarValue;

/// A single metric slot inside a result element.
///
/// The same slot moves through three representations: in-memory partial
/// state, partial state that crossed a serialization boundary, and the
/// finalized scalar handed back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    State(AggState),
    Encoded(serde_json::Value),
    Final(ScalarValue),
}

impl MetricValue {
    pub fn encoded(state: &AggState) -> Result<Self, serde_json::Error> {
        state.encode().map(MetricValue::Encoded)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, MetricValue::Final(_))
    }

    pub fn as_final(&self) -> Option<&ScalarValue> {
        match self {
            MetricValue::Final(v) => Some(v),
            _ => None,
        }
    }
}

impl From<AggState> for MetricValue {
    fn from(state: AggState) -> Self {
        MetricValue::State(state)
    }
}

impl From<ScalarValue> for MetricValue {
    fn from(value: ScalarValue) -> Self {
        MetricValue::Final(value)
    }
}
