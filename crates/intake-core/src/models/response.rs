use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A scale answer to a screening question.
///
/// Every scale used by the form draws from this one vocabulary; which subset
/// a given question accepts is declared by its field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Response {
    Yes,
    No,
    NotSure,
    Sometimes,
    Never,
    Often,
    Independent,
    NeedsAssistance,
    Dependent,
    Unable,
}

impl Response {
    pub fn label(self) -> &'static str {
        match self {
            Response::Yes => "Yes",
            Response::No => "No",
            Response::NotSure => "Not Sure",
            Response::Sometimes => "Sometimes",
            Response::Never => "Never",
            Response::Often => "Often",
            Response::Independent => "Independent",
            Response::NeedsAssistance => "Needs Assistance",
            Response::Dependent => "Dependent",
            Response::Unable => "Unable",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
