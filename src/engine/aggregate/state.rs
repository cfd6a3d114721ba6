use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::types::ScalarValue;

/// Intermediate (mergeable) aggregate state as produced by a segment scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggState {
    CountAll {
        count: i64,
    },
    CountUnique {
        values: HashSet<String>,
    },
    Sum {
        sum: i64,
    },
    Avg {
        sum: i64,
        count: i64,
    },
    Min {
        min_num: Option<i64>,
        min_str: Option<String>,
    },
    Max {
        max_num: Option<i64>,
        max_str: Option<String>,
    },
}

impl AggState {
    pub fn kind(&self) -> &'static str {
        match self {
            AggState::CountAll { .. } => "count_all",
            AggState::CountUnique { .. } => "count_unique",
            AggState::Sum { .. } => "sum",
            AggState::Avg { .. } => "avg",
            AggState::Min { .. } => "min",
            AggState::Max { .. } => "max",
        }
    }

    /// Collapses the state into its user-facing value.
    pub fn finalize(&self) -> ScalarValue {
        match self {
            AggState::CountAll { count } => ScalarValue::Int64(*count),
            AggState::CountUnique { values } => ScalarValue::Int64(values.len() as i64),
            AggState::Sum { sum } => ScalarValue::Int64(*sum),
            AggState::Avg { sum, count } => {
                if *count == 0 {
                    return ScalarValue::Float64(0.0);
                }
                ScalarValue::Float64(*sum as f64 / *count as f64)
            }
            AggState::Min { min_num, min_str } => numeric_or_string(*min_num, min_str),
            AggState::Max { max_num, max_str } => numeric_or_string(*max_num, max_str),
        }
    }

    pub fn encode(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn numeric_or_string(num: Option<i64>, text: &Option<String>) -> ScalarValue {
    match (num, text) {
        (Some(n), _) => ScalarValue::Int64(n),
        (None, Some(s)) => ScalarValue::Utf8(s.clone()),
        (None, None) => ScalarValue::Null,
    }
}
