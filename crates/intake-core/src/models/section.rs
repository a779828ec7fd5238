use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the seven thematic question groups of the intake form.
///
/// Declaration order is the order the patient walks through the form and the
/// order sections appear in the generated report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Demographics,
    Symptoms,
    Cognitive,
    Medications,
    Adl,
    Iadl,
    MedicalHistory,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Demographics,
        Section::Symptoms,
        Section::Cognitive,
        Section::Medications,
        Section::Adl,
        Section::Iadl,
        Section::MedicalHistory,
    ];

    /// Zero-based position of the section in the form.
    pub fn index(self) -> usize {
        match self {
            Section::Demographics => 0,
            Section::Symptoms => 1,
            Section::Cognitive => 2,
            Section::Medications => 3,
            Section::Adl => 4,
            Section::Iadl => 5,
            Section::MedicalHistory => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Stable machine identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Section::Demographics => "demographics",
            Section::Symptoms => "symptoms",
            Section::Cognitive => "cognitive",
            Section::Medications => "medications",
            Section::Adl => "adl",
            Section::Iadl => "iadl",
            Section::MedicalHistory => "medical_history",
        }
    }

    /// Patient-facing title shown in the progress header.
    pub fn title(self) -> &'static str {
        match self {
            Section::Demographics => "Personal Information",
            Section::Symptoms => "Current Symptoms",
            Section::Cognitive => "Memory and Thinking",
            Section::Medications => "Medications",
            Section::Adl => "Daily Activities (Basic)",
            Section::Iadl => "Daily Activities (Complex)",
            Section::MedicalHistory => "Medical History",
        }
    }

    /// Heading used for the section in the clinical report.
    pub fn report_heading(self) -> &'static str {
        match self {
            Section::Demographics => "PATIENT INFORMATION",
            Section::Symptoms => "CURRENT SYMPTOMS",
            Section::Cognitive => "COGNITIVE ASSESSMENT",
            Section::Medications => "MEDICATIONS",
            Section::Adl => "BASIC ACTIVITIES OF DAILY LIVING (ADL)",
            Section::Iadl => "INSTRUMENTAL ACTIVITIES OF DAILY LIVING (IADL)",
            Section::MedicalHistory => "MEDICAL HISTORY",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}
