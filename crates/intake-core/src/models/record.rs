use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerValue;
use super::medication::MedicationEntry;
use super::response::Response;
use super::section::Section;
use crate::error::CoreError;

/// Answers for a single section, keyed by field key.
pub type SectionAnswers = BTreeMap<String, AnswerValue>;

/// Everything the patient has answered during one session.
///
/// The record itself performs no validation. Writes are expected to go
/// through the session's answer store, which checks each value against the
/// section schema before calling [`PatientRecord::put`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    #[serde(default)]
    pub sections: BTreeMap<Section, SectionAnswers>,
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|answers| answers.is_empty())
    }

    pub fn section(&self, section: Section) -> Option<&SectionAnswers> {
        self.sections.get(&section)
    }

    pub fn get(&self, section: Section, key: &str) -> Option<&AnswerValue> {
        self.sections.get(&section).and_then(|answers| answers.get(key))
    }

    /// Upsert a value; last write wins.
    pub fn put(&mut self, section: Section, key: impl Into<String>, value: AnswerValue) {
        self.sections
            .entry(section)
            .or_default()
            .insert(key.into(), value);
    }

    pub fn response(&self, section: Section, key: &str) -> Option<Response> {
        self.get(section, key).and_then(AnswerValue::as_response)
    }

    /// `true` only when the field holds exactly `expected`.
    pub fn is(&self, section: Section, key: &str, expected: Response) -> bool {
        self.response(section, key) == Some(expected)
    }

    /// Text answer, with blank strings treated as absent.
    pub fn text(&self, section: Section, key: &str) -> Option<&str> {
        self.get(section, key)
            .and_then(AnswerValue::as_text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn integer(&self, section: Section, key: &str) -> Option<i64> {
        self.get(section, key).and_then(AnswerValue::as_integer)
    }

    pub fn date(&self, section: Section, key: &str) -> Option<jiff::civil::Date> {
        self.get(section, key).and_then(AnswerValue::as_date)
    }

    pub fn choice(&self, section: Section, key: &str) -> Option<&str> {
        self.get(section, key).and_then(AnswerValue::as_choice)
    }

    pub fn multi_choice(&self, section: Section, key: &str) -> Option<&[String]> {
        self.get(section, key).and_then(AnswerValue::as_multi_choice)
    }

    pub fn medications(&self, section: Section, key: &str) -> Option<&[MedicationEntry]> {
        self.get(section, key).and_then(AnswerValue::as_medications)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
