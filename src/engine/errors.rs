use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced while consuming a finalized result sequence.
#[derive(Debug, Error)]
pub enum FinalizeError {
    #[error("Failed to deserialize intermediate state for {aggregator}: {source}")]
    Deserialize {
        aggregator: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot finalize {aggregator}: {reason}")]
    Finalize { aggregator: String, reason: String },

    #[error("Runner failed: {0}")]
    Runner(String),
}

impl FinalizeError {
    pub fn finalize(aggregator: &str, reason: impl Into<String>) -> Self {
        FinalizeError::Finalize {
            aggregator: aggregator.to_string(),
            reason: reason.into(),
        }
    }

    pub fn log_error(&self) {
        match self {
            FinalizeError::Deserialize { aggregator, source } => {
                error!("Deserialize failed for aggregator {}: {}", aggregator, source);
                debug!("Deserialize error details: {:?}", source);
            }
            FinalizeError::Finalize { aggregator, reason } => {
                error!("Finalize failed for aggregator {}: {}", aggregator, reason);
            }
            FinalizeError::Runner(e) => {
                error!("Inner runner failed: {}", e);
                debug!("Runner error details: {}", e);
            }
        }
    }
}
