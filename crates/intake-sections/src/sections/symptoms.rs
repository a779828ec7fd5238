use intake_core::fields::symptoms as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{FieldSpec, IntRange, ResponseScale};

/// Current symptoms: ten screening questions with follow-ups for pain and
/// falls.
pub struct Symptoms;

impl Questionnaire for Symptoms {
    fn section(&self) -> Section {
        Section::Symptoms
    }

    fn introduction(&self) -> &str {
        "Please tell us about any symptoms you are experiencing. Select YES or NO for each question."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let screening = [
                (
                    f::PAIN,
                    "Pain",
                    "Are you currently experiencing any PAIN?",
                    "This includes headaches, joint pain, muscle pain, or any other discomfort",
                ),
                (
                    f::DIZZINESS,
                    "Dizziness",
                    "Do you feel DIZZY or lightheaded?",
                    "Feeling unsteady or like the room is spinning",
                ),
                (
                    f::FATIGUE,
                    "Fatigue",
                    "Do you feel unusually TIRED or weak?",
                    "More tired than usual, lack of energy",
                ),
                (
                    f::BREATHING,
                    "Breathing difficulty",
                    "Do you have difficulty BREATHING?",
                    "Shortness of breath, wheezing, or chest tightness",
                ),
                (
                    f::SLEEP,
                    "Sleep problems",
                    "Do you have trouble SLEEPING?",
                    "Difficulty falling asleep, staying asleep, or sleeping too much",
                ),
                (
                    f::APPETITE,
                    "Appetite changes",
                    "Have you noticed changes in your APPETITE?",
                    "Eating more or less than usual",
                ),
                (
                    f::VISION,
                    "Vision problems",
                    "Do you have problems with your VISION?",
                    "Blurry vision, difficulty reading, or seeing things",
                ),
                (
                    f::HEARING,
                    "Hearing problems",
                    "Do you have problems with your HEARING?",
                    "Difficulty hearing conversations or sounds",
                ),
                (
                    f::BALANCE,
                    "Balance problems",
                    "Do you have problems with BALANCE or walking?",
                    "Feeling unsteady, using a cane or walker",
                ),
                (
                    f::FALLS,
                    "Falls",
                    "Have you had any FALLS in the past 6 months?",
                    "Falling down, tripping, or losing balance",
                ),
            ];

            let mut fields: Vec<FieldSpec> = screening
                .iter()
                .map(|(key, label, question, help)| {
                    FieldSpec::response(key, label, question, ResponseScale::YesNoNotSure)
                        .with_help(help)
                })
                .collect();

            // Follow-ups, only asked after a positive screening answer
            fields.push(FieldSpec::text(
                f::PAIN_LOCATION,
                "Location",
                "Please describe where you feel pain:",
            ));
            fields.push(FieldSpec::integer(
                f::PAIN_LEVEL,
                "Severity",
                "How severe is your pain? (0 = No pain, 10 = Worst pain)",
                IntRange::new(0, 10),
            ));
            fields.push(FieldSpec::integer(
                f::FALLS_COUNT,
                "Number of falls",
                "How many times have you fallen?",
                IntRange::new(1, 50),
            ));
            fields.push(FieldSpec::text(
                f::OTHER_SYMPTOMS,
                "Other symptoms",
                "Please describe any other symptoms not mentioned above:",
            ));

            fields
        });
        &FIELDS
    }
}
