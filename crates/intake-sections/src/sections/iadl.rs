use intake_core::fields::iadl as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{FieldSpec, ResponseScale};

pub const LIVING_SITUATION_OPTIONS: [&str; 9] = [
    "Own home - alone",
    "Own home - with spouse/partner",
    "Own home - with family",
    "Apartment/Condo - alone",
    "Apartment/Condo - with others",
    "Retirement residence",
    "Assisted living facility",
    "Long-term care facility",
    "Other",
];

/// Instrumental activities of daily living (Lawton).
/// Eight activities rated Independent / Needs Assistance / Unable, plus
/// living situation and caregiver support.
pub struct Iadl;

impl Questionnaire for Iadl {
    fn section(&self) -> Section {
        Section::Iadl
    }

    fn introduction(&self) -> &str {
        "These questions ask about more complex daily activities. Please select the answer that best describes your current ability."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let activities = [
                (f::TELEPHONE, "Telephone", "Making and receiving phone calls"),
                (f::SHOPPING, "Shopping", "Getting groceries and other items"),
                (f::FOOD_PREP, "Food Prep", "Planning and cooking meals"),
                (
                    f::HOUSEKEEPING,
                    "Housekeeping",
                    "Cleaning, laundry, and home maintenance",
                ),
                (f::LAUNDRY, "Laundry", "Washing and drying clothes"),
                (
                    f::TRANSPORTATION,
                    "Transportation",
                    "Getting to places outside walking distance",
                ),
                (
                    f::MEDICATIONS,
                    "Medications",
                    "Taking the right medication at the right time",
                ),
                (f::FINANCES, "Finances", "Paying bills and managing finances"),
            ];

            let mut fields: Vec<FieldSpec> = activities
                .iter()
                .map(|(key, label, description)| {
                    FieldSpec::response(key, label, description, ResponseScale::IadlLevel)
                })
                .collect();

            fields.push(FieldSpec::choice(
                f::LIVING_SITUATION,
                "Living situation",
                "Where do you currently live?",
                &LIVING_SITUATION_OPTIONS,
            ));
            fields.push(FieldSpec::response(
                f::HAS_CAREGIVER,
                "Caregiver",
                "Do you have someone who helps you regularly?",
                ResponseScale::YesNo,
            ));
            fields.push(FieldSpec::text(
                f::CAREGIVER_RELATION,
                "Caregiver relationship",
                "Who helps you? (relationship)",
            ));
            fields
        });
        &FIELDS
    }
}
