//! intake-core
//!
//! Pure domain types for the geriatric intake form: sections, answer values,
//! the patient record, field key constants and export naming conventions.
//! No I/O; this is the shared vocabulary of the intake system.

pub mod error;
pub mod fields;
pub mod models;
pub mod naming;
