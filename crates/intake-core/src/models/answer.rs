use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::medication::MedicationEntry;
use super::response::Response;

/// A single stored answer. Which variant a field accepts is declared by the
/// section schema; the store rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    Response(Response),
    Text(String),
    Integer(i64),
    Date(jiff::civil::Date),
    Choice(String),
    /// Selected options, kept in declaration order without duplicates.
    MultiChoice(Vec<String>),
    Medications(Vec<MedicationEntry>),
}

impl AnswerValue {
    /// Short variant name used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Response(_) => "response",
            AnswerValue::Text(_) => "text",
            AnswerValue::Integer(_) => "integer",
            AnswerValue::Date(_) => "date",
            AnswerValue::Choice(_) => "choice",
            AnswerValue::MultiChoice(_) => "multi_choice",
            AnswerValue::Medications(_) => "medications",
        }
    }

    pub fn as_response(&self) -> Option<Response> {
        match self {
            AnswerValue::Response(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<jiff::civil::Date> {
        match self {
            AnswerValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_multi_choice(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiChoice(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_medications(&self) -> Option<&[MedicationEntry]> {
        match self {
            AnswerValue::Medications(v) => Some(v),
            _ => None,
        }
    }

    /// Human-readable rendering used by review views.
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Response(r) => r.label().to_string(),
            AnswerValue::Text(s) | AnswerValue::Choice(s) => s.clone(),
            AnswerValue::Integer(n) => n.to_string(),
            AnswerValue::Date(d) => d.to_string(),
            AnswerValue::MultiChoice(v) => v.join(", "),
            AnswerValue::Medications(v) => v
                .iter()
                .filter(|m| m.is_named())
                .map(MedicationEntry::display_line)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl From<Response> for AnswerValue {
    fn from(r: Response) -> Self {
        AnswerValue::Response(r)
    }
}
