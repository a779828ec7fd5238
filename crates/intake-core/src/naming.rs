//! Export file naming conventions.
//!
//! Pure string functions. The stem carries the generation time so that
//! successive exports from the same kiosk never collide.

use jiff::civil::DateTime;

pub const REPORT_PREFIX: &str = "patient_intake_";

/// `patient_intake_<YYYYMMDD_HHMMSS>`
pub fn report_stem(generated_at: DateTime) -> String {
    format!("{REPORT_PREFIX}{}", generated_at.strftime("%Y%m%d_%H%M%S"))
}

pub fn report_docx(generated_at: DateTime) -> String {
    format!("{}.docx", report_stem(generated_at))
}

pub fn report_markdown(generated_at: DateTime) -> String {
    format!("{}.md", report_stem(generated_at))
}

pub fn report_json(generated_at: DateTime) -> String {
    format!("{}.json", report_stem(generated_at))
}
