use intake_core::models::answer::AnswerValue;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The set of scale answers a response question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseScale {
    /// Binary yes/no.
    YesNo,
    /// Screening tri-state.
    YesNoNotSure,
    /// Memory self-report.
    YesNoSometimes,
    /// Adherence frequency.
    NeverSometimesOften,
    /// Katz-style basic activities.
    AdlLevel,
    /// Lawton-style instrumental activities.
    IadlLevel,
}

impl ResponseScale {
    /// Options in the order they are offered to the patient.
    pub fn options(self) -> &'static [Response] {
        match self {
            ResponseScale::YesNo => &[Response::Yes, Response::No],
            ResponseScale::YesNoNotSure => &[Response::Yes, Response::No, Response::NotSure],
            ResponseScale::YesNoSometimes => &[Response::Yes, Response::No, Response::Sometimes],
            ResponseScale::NeverSometimesOften => {
                &[Response::Never, Response::Sometimes, Response::Often]
            }
            ResponseScale::AdlLevel => &[
                Response::Independent,
                Response::NeedsAssistance,
                Response::Dependent,
            ],
            ResponseScale::IadlLevel => &[
                Response::Independent,
                Response::NeedsAssistance,
                Response::Unable,
            ],
        }
    }

    pub fn contains(self, response: Response) -> bool {
        self.options().contains(&response)
    }
}

/// Inclusive integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Inclusive date bounds. `not_after_today` is resolved against the date
/// passed to validation rather than the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateBounds {
    pub min: Option<Date>,
    pub not_after_today: bool,
}

impl DateBounds {
    pub fn contains(&self, value: Date, today: Date) -> bool {
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        !(self.not_after_today && value > today)
    }
}

/// The value domain a field accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Response { scale: ResponseScale },
    Text,
    Integer { range: IntRange },
    Date { bounds: DateBounds },
    Choice { options: Vec<String> },
    MultiChoice { options: Vec<String> },
    /// Variable-length medication list, capped at `max_entries`.
    Medications { max_entries: usize },
}

/// A single question on the form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub key: String,
    /// Short label used in the clinical report, e.g. "Breathing difficulty".
    pub label: String,
    /// Question text as shown to the patient.
    pub question: String,
    pub help: Option<String>,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(key: &str, label: &str, question: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            question: question.to_string(),
            help: None,
            kind,
        }
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn response(key: &str, label: &str, question: &str, scale: ResponseScale) -> Self {
        Self::new(key, label, question, FieldKind::Response { scale })
    }

    pub fn text(key: &str, label: &str, question: &str) -> Self {
        Self::new(key, label, question, FieldKind::Text)
    }

    pub fn integer(key: &str, label: &str, question: &str, range: IntRange) -> Self {
        Self::new(key, label, question, FieldKind::Integer { range })
    }

    pub fn choice(key: &str, label: &str, question: &str, options: &[&str]) -> Self {
        Self::new(
            key,
            label,
            question,
            FieldKind::Choice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    pub fn multi_choice(key: &str, label: &str, question: &str, options: &[&str]) -> Self {
        Self::new(
            key,
            label,
            question,
            FieldKind::MultiChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    /// Check `value` against this field's domain and return its canonical
    /// form. Multi-choice selections come back in declaration order with
    /// duplicates collapsed; every other variant is returned unchanged.
    pub fn accept(
        &self,
        section: Section,
        value: AnswerValue,
        today: Date,
    ) -> Result<AnswerValue, ValidationError> {
        let reject = |message: String| ValidationError {
            section,
            key: self.key.clone(),
            message,
        };

        match (&self.kind, value) {
            (FieldKind::Response { scale }, AnswerValue::Response(r)) => {
                if scale.contains(r) {
                    Ok(AnswerValue::Response(r))
                } else {
                    Err(reject(format!(
                        "{}: '{}' is not one of the offered answers",
                        self.label,
                        r.label()
                    )))
                }
            }
            (FieldKind::Text, AnswerValue::Text(s)) => Ok(AnswerValue::Text(s)),
            (FieldKind::Integer { range }, AnswerValue::Integer(n)) => {
                if range.contains(n) {
                    Ok(AnswerValue::Integer(n))
                } else {
                    Err(reject(format!(
                        "{}: {} is outside range [{}, {}]",
                        self.label, n, range.min, range.max
                    )))
                }
            }
            (FieldKind::Date { bounds }, AnswerValue::Date(d)) => {
                if bounds.contains(d, today) {
                    Ok(AnswerValue::Date(d))
                } else {
                    Err(reject(format!("{}: {} is outside the accepted dates", self.label, d)))
                }
            }
            (FieldKind::Choice { options }, AnswerValue::Choice(choice)) => {
                if options.iter().any(|o| *o == choice) {
                    Ok(AnswerValue::Choice(choice))
                } else {
                    Err(reject(format!("{}: unknown option '{}'", self.label, choice)))
                }
            }
            (FieldKind::MultiChoice { options }, AnswerValue::MultiChoice(selected)) => {
                if let Some(unknown) = selected.iter().find(|s| !options.contains(*s)) {
                    return Err(reject(format!("{}: unknown option '{}'", self.label, unknown)));
                }
                let canonical = options
                    .iter()
                    .filter(|o| selected.contains(*o))
                    .cloned()
                    .collect();
                Ok(AnswerValue::MultiChoice(canonical))
            }
            (FieldKind::Medications { max_entries }, AnswerValue::Medications(list)) => {
                if list.len() <= *max_entries {
                    Ok(AnswerValue::Medications(list))
                } else {
                    Err(reject(format!(
                        "{}: {} entries exceeds the maximum of {}",
                        self.label,
                        list.len(),
                        max_entries
                    )))
                }
            }
            (kind, other) => Err(reject(format!(
                "{}: expected {} value, got {}",
                self.label,
                kind.expected(),
                other.kind()
            ))),
        }
    }
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::Response { .. } => "response",
            FieldKind::Text => "text",
            FieldKind::Integer { .. } => "integer",
            FieldKind::Date { .. } => "date",
            FieldKind::Choice { .. } => "choice",
            FieldKind::MultiChoice { .. } => "multi_choice",
            FieldKind::Medications { .. } => "medications",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub section: Section,
    pub key: String,
    pub message: String,
}
