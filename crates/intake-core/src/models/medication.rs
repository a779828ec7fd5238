use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How often a medication is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoseFrequency {
    #[default]
    OnceDaily,
    TwiceDaily,
    ThreeTimesDaily,
    AsNeeded,
    Weekly,
    Other,
}

impl DoseFrequency {
    /// Options in the order they are offered; the first is the default.
    pub const ALL: [DoseFrequency; 6] = [
        DoseFrequency::OnceDaily,
        DoseFrequency::TwiceDaily,
        DoseFrequency::ThreeTimesDaily,
        DoseFrequency::AsNeeded,
        DoseFrequency::Weekly,
        DoseFrequency::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DoseFrequency::OnceDaily => "Once daily",
            DoseFrequency::TwiceDaily => "Twice daily",
            DoseFrequency::ThreeTimesDaily => "Three times daily",
            DoseFrequency::AsNeeded => "As needed",
            DoseFrequency::Weekly => "Weekly",
            DoseFrequency::Other => "Other",
        }
    }
}

impl fmt::Display for DoseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the patient's medication list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationEntry {
    pub name: String,
    /// Free text, e.g. "10mg". Often unknown to the patient.
    pub dose: String,
    pub frequency: DoseFrequency,
}

impl MedicationEntry {
    pub fn new(name: impl Into<String>, dose: impl Into<String>, frequency: DoseFrequency) -> Self {
        Self {
            name: name.into(),
            dose: dose.into(),
            frequency,
        }
    }

    /// Entries without a name are placeholders and are left out of views.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// `name dose (frequency)`, omitting the dose when it is blank.
    pub fn display_line(&self) -> String {
        let name = self.name.trim();
        let dose = self.dose.trim();
        if dose.is_empty() {
            format!("{name} ({})", self.frequency)
        } else {
            format!("{name} {dose} ({})", self.frequency)
        }
    }
}
