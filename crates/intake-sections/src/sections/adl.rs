use intake_core::fields::adl as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{FieldSpec, ResponseScale};

pub const MOBILITY_AID_OPTIONS: [&str; 6] =
    ["Cane", "Walker", "Wheelchair", "Scooter", "Grab bars", "Other"];

/// Basic activities of daily living (Katz).
/// Six activities rated Independent / Needs Assistance / Dependent, plus
/// mobility aids.
pub struct Adl;

impl Questionnaire for Adl {
    fn section(&self) -> Section {
        Section::Adl
    }

    fn introduction(&self) -> &str {
        "These questions ask about your ability to perform basic daily activities. Please select the answer that best describes your current ability."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let activities = [
                (f::BATHING, "Bathing", "Taking a bath or shower"),
                (f::DRESSING, "Dressing", "Getting dressed and undressed"),
                (f::TOILETING, "Toileting", "Getting to and using the toilet"),
                (f::TRANSFERRING, "Transferring", "Getting in and out of bed or chair"),
                (f::CONTINENCE, "Continence", "Controlling bladder and bowel"),
                (f::FEEDING, "Feeding", "Feeding yourself"),
            ];

            let mut fields: Vec<FieldSpec> = activities
                .iter()
                .map(|(key, label, description)| {
                    FieldSpec::response(key, label, description, ResponseScale::AdlLevel)
                })
                .collect();

            fields.push(FieldSpec::response(
                f::USES_MOBILITY_AIDS,
                "Uses mobility aids",
                "Do you use any mobility aids?",
                ResponseScale::YesNo,
            ));
            fields.push(FieldSpec::multi_choice(
                f::MOBILITY_AIDS_LIST,
                "Mobility aids",
                "Which mobility aids do you use? (Select all that apply)",
                &MOBILITY_AID_OPTIONS,
            ));
            fields
        });
        &FIELDS
    }
}
