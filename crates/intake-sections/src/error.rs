use thiserror::Error;

use intake_core::models::section::Section;

use crate::domain::ValidationError;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown field '{key}' in section '{section}'")]
    UnknownField { section: Section, key: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
