//! intake-export
//!
//! Review summary, document blocks for the intake report, and DOCX
//! generation from rendered templates.

pub mod blocks;
pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
pub mod summary;
