use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::MedicationEntry;
use intake_core::models::section::Section;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// A single host interaction, already validated against the widget's domain
/// by the presentation layer (and validated again by the store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntakeEvent {
    Answer {
        section: Section,
        key: String,
        value: AnswerValue,
    },
    Medication {
        index: usize,
        entry: MedicationEntry,
    },
    Advance,
    Retreat,
    Confirm {
        confirmed: bool,
    },
    Submit,
    Reset,
}

impl IntakeEvent {
    pub fn answer(section: Section, key: &str, value: impl Into<AnswerValue>) -> Self {
        IntakeEvent::Answer {
            section,
            key: key.to_string(),
            value: value.into(),
        }
    }

    /// Parse a JSON array of events, as written by the kiosk front end.
    pub fn parse_script(json: &str) -> Result<Vec<IntakeEvent>, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}
