use thiserror::Error;

use intake_sections::error::SchemaError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("medication {index} is out of range: the list holds {count} entries")]
    MedicationIndex { index: usize, count: usize },

    #[error("invalid event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
}
