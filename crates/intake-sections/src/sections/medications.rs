use intake_core::fields::medications as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{FieldKind, FieldSpec, IntRange, ResponseScale};

/// Upper bound on the number of medications a patient can list.
pub const MAX_MEDICATIONS: i64 = 30;

/// Medications, adherence and drug allergies.
pub struct Medications;

impl Questionnaire for Medications {
    fn section(&self) -> Section {
        Section::Medications
    }

    fn introduction(&self) -> &str {
        "Please list all medications you are currently taking, including prescriptions, over-the-counter medicines, vitamins, and supplements."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                FieldSpec::response(
                    f::TAKING_MEDICATIONS,
                    "Taking medications",
                    "Are you currently taking any medications?",
                    ResponseScale::YesNo,
                ),
                FieldSpec::integer(
                    f::NUM_MEDICATIONS,
                    "Number of medications",
                    "How many different medications do you take?",
                    IntRange::new(1, MAX_MEDICATIONS),
                ),
                FieldSpec::new(
                    f::MEDICATIONS_LIST,
                    "Medications",
                    "Please list your medications",
                    FieldKind::Medications {
                        max_entries: MAX_MEDICATIONS as usize,
                    },
                )
                .with_help("Include the name, dose if known, and how often you take it"),
                FieldSpec::response(
                    f::NEEDS_HELP,
                    "Needs help with medications",
                    "Do you need help managing your medications?",
                    ResponseScale::YesNo,
                ),
                FieldSpec::response(
                    f::MISS_DOSES,
                    "Misses doses",
                    "Do you ever miss doses of your medications?",
                    ResponseScale::NeverSometimesOften,
                ),
                FieldSpec::response(
                    f::HAS_ALLERGIES,
                    "Drug allergies",
                    "Do you have any allergies to medications?",
                    ResponseScale::YesNo,
                ),
                FieldSpec::text(
                    f::ALLERGIES_LIST,
                    "Allergies",
                    "Please list your medication allergies:",
                ),
            ]
        });
        &FIELDS
    }
}
