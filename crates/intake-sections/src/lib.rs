//! intake-sections
//!
//! Section schema registry for the intake form. Pure data: each section
//! declares its questions, report labels and value domains, and validates
//! answers against them.

pub mod domain;
pub mod error;
pub mod sections;

use domain::FieldSpec;
use error::SchemaError;
use intake_core::models::answer::AnswerValue;
use intake_core::models::section::Section;
use jiff::civil::Date;

/// Trait implemented by each section of the intake form.
pub trait Questionnaire: Send + Sync {
    /// The section this questionnaire describes.
    fn section(&self) -> Section;

    /// Patient-facing title (e.g., "Memory and Thinking").
    fn title(&self) -> &str {
        self.section().title()
    }

    /// Introductory sentence shown above the questions.
    fn introduction(&self) -> &str;

    /// The questions in display order.
    fn fields(&self) -> &[FieldSpec];

    fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Validate an answer for `key` and return its canonical form.
    fn check_answer(
        &self,
        key: &str,
        value: AnswerValue,
        today: Date,
    ) -> Result<AnswerValue, SchemaError> {
        let field = self.field(key).ok_or_else(|| SchemaError::UnknownField {
            section: self.section(),
            key: key.to_string(),
        })?;
        Ok(field.accept(self.section(), value, today)?)
    }

    /// Format the section's questions as plain text, one per line, for
    /// printing a paper copy of the form.
    fn to_question_sheet(&self) -> String {
        let mut output = format!("## {}\n\n{}\n\n", self.title(), self.introduction());
        for field in self.fields() {
            output.push_str(&format!("- {}\n", field.question));
            if let Some(help) = &field.help {
                output.push_str(&format!("  ({help})\n"));
            }
        }
        output
    }
}

/// Return every section in form order.
pub fn all_sections() -> Vec<Box<dyn Questionnaire>> {
    Section::ALL.into_iter().map(get_section).collect()
}

/// Look up the questionnaire for a section.
pub fn get_section(section: Section) -> Box<dyn Questionnaire> {
    match section {
        Section::Demographics => Box::new(sections::demographics::Demographics),
        Section::Symptoms => Box::new(sections::symptoms::Symptoms),
        Section::Cognitive => Box::new(sections::cognitive::Cognitive),
        Section::Medications => Box::new(sections::medications::Medications),
        Section::Adl => Box::new(sections::adl::Adl),
        Section::Iadl => Box::new(sections::iadl::Iadl),
        Section::MedicalHistory => Box::new(sections::medical_history::MedicalHistory),
    }
}
