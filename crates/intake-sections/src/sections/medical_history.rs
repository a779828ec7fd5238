use intake_core::fields::medical_history as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{FieldSpec, ResponseScale};

/// Past and current medical conditions, surgeries and hospitalizations.
pub struct MedicalHistory;

impl Questionnaire for MedicalHistory {
    fn section(&self) -> Section {
        Section::MedicalHistory
    }

    fn introduction(&self) -> &str {
        "Please tell us about your past and current medical conditions."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let conditions = [
                (
                    f::HEART_DISEASE,
                    "Heart Disease",
                    "Heart attack, heart failure, irregular heartbeat",
                ),
                (f::HIGH_BLOOD_PRESSURE, "High Blood Pressure", "Hypertension"),
                (f::DIABETES, "Diabetes", "Type 1 or Type 2 diabetes"),
                (
                    f::STROKE,
                    "Stroke/TIA",
                    "Mini-stroke or transient ischemic attack",
                ),
                (f::CANCER, "Cancer", "Any type of cancer, past or present"),
                (
                    f::ARTHRITIS,
                    "Arthritis",
                    "Joint pain, osteoarthritis, rheumatoid arthritis",
                ),
                (f::OSTEOPOROSIS, "Osteoporosis", "Weak or brittle bones"),
                (f::LUNG_DISEASE, "Lung Disease", "COPD, emphysema, asthma"),
                (f::KIDNEY_DISEASE, "Kidney Disease", "Chronic kidney disease"),
                (f::DEPRESSION, "Depression/Anxiety", "Mental health conditions"),
                (
                    f::DEMENTIA,
                    "Memory Problems",
                    "Dementia, Alzheimer's, or cognitive impairment",
                ),
                (f::PARKINSONS, "Parkinson's Disease", "Movement disorder"),
            ];

            let mut fields: Vec<FieldSpec> = conditions
                .iter()
                .map(|(key, label, description)| {
                    FieldSpec::response(
                        key,
                        label,
                        label,
                        ResponseScale::YesNoNotSure,
                    )
                    .with_help(description)
                })
                .collect();

            fields.extend([
                FieldSpec::response(
                    f::HAD_SURGERIES,
                    "Past surgeries",
                    "Have you had any surgeries?",
                    ResponseScale::YesNo,
                ),
                FieldSpec::text(
                    f::SURGERIES_LIST,
                    "Surgeries",
                    "Please list your surgeries and approximate dates:",
                ),
                FieldSpec::response(
                    f::HOSPITALIZED_PAST_YEAR,
                    "Recent hospitalization",
                    "Have you been hospitalized in the past year?",
                    ResponseScale::YesNo,
                ),
                FieldSpec::text(
                    f::HOSPITALIZATION_REASON,
                    "Hospitalization reason",
                    "Please describe the reason for hospitalization:",
                ),
                FieldSpec::text(
                    f::OTHER_CONDITIONS,
                    "Other conditions",
                    "Any other medical conditions not mentioned above?",
                ),
            ]);
            fields
        });
        &FIELDS
    }
}
