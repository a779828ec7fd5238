use intake_core::fields::{cognitive, demographics, iadl, medical_history, medications, symptoms};
use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::{DoseFrequency, MedicationEntry};
use intake_core::models::record::PatientRecord;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_export::summary::{
    NO_MEDICATIONS, dose_and_frequency, display_label, excluded_keys, summarize,
    summarize_section,
};

fn labels(record: &PatientRecord, section: Section) -> Vec<String> {
    summarize_section(record, section)
        .items
        .into_iter()
        .map(|item| item.label)
        .collect()
}

#[test]
fn display_label_title_cases_key() {
    assert_eq!(display_label("food_prep"), "Food Prep");
    assert_eq!(display_label("forget_names"), "Forget Names");
    assert_eq!(display_label("pain"), "Pain");
}

#[test]
fn summaries_cover_all_sections_in_order() {
    let summaries = summarize(&PatientRecord::new());
    let sections: Vec<Section> = summaries.iter().map(|s| s.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
}

#[test]
fn symptoms_keep_only_yes_in_declaration_order() {
    let mut record = PatientRecord::new();
    record.put(Section::Symptoms, symptoms::FALLS, Response::Yes.into());
    record.put(Section::Symptoms, symptoms::PAIN, Response::Yes.into());
    record.put(Section::Symptoms, symptoms::FATIGUE, Response::No.into());
    record.put(Section::Symptoms, symptoms::PAIN_LEVEL, AnswerValue::Integer(4));
    assert_eq!(labels(&record, Section::Symptoms), vec!["Pain", "Falls"]);
}

#[test]
fn cognitive_includes_sometimes() {
    let mut record = PatientRecord::new();
    record.put(Section::Cognitive, cognitive::FORGET_NAMES, Response::Sometimes.into());
    record.put(Section::Cognitive, cognitive::GET_LOST, Response::No.into());
    record.put(Section::Cognitive, cognitive::CITY, AnswerValue::Text("Montreal".into()));
    let summary = summarize_section(&record, Section::Cognitive);
    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.items[0].label, "Forget Names");
    assert_eq!(summary.items[0].value, "Sometimes");
    assert!(summary.note.is_none());
}

#[test]
fn iadl_keeps_needs_assistance_and_unable() {
    let mut record = PatientRecord::new();
    record.put(Section::Iadl, iadl::SHOPPING, Response::Unable.into());
    record.put(Section::Iadl, iadl::FINANCES, Response::NeedsAssistance.into());
    record.put(Section::Iadl, iadl::TELEPHONE, Response::Independent.into());
    record.put(Section::Iadl, iadl::HAS_CAREGIVER, Response::Yes.into());
    assert_eq!(labels(&record, Section::Iadl), vec!["Shopping", "Finances"]);
}

#[test]
fn excluded_fields_never_surface() {
    let mut record = PatientRecord::new();
    for key in excluded_keys(Section::MedicalHistory) {
        record.put(Section::MedicalHistory, *key, Response::Yes.into());
    }
    record.put(Section::MedicalHistory, medical_history::CANCER, Response::Yes.into());

    for section in Section::ALL {
        let summary = summarize_section(&record, section);
        for key in excluded_keys(section) {
            let label = display_label(key);
            assert!(
                summary.items.iter().all(|item| item.label != label),
                "{key} surfaced in {section}"
            );
        }
    }
    assert_eq!(labels(&record, Section::MedicalHistory), vec!["Cancer"]);
}

#[test]
fn empty_sections_carry_fixed_note() {
    let summary = summarize_section(&PatientRecord::new(), Section::Symptoms);
    assert!(summary.items.is_empty());
    assert_eq!(summary.note.as_deref(), Some("No significant symptoms reported"));

    let summary = summarize_section(&PatientRecord::new(), Section::Adl);
    assert_eq!(summary.note.as_deref(), Some("Independent in all basic activities"));
}

#[test]
fn not_taking_medications_reports_fixed_line() {
    let mut record = PatientRecord::new();
    record.put(Section::Medications, medications::TAKING_MEDICATIONS, Response::No.into());
    record.put(
        Section::Medications,
        medications::MEDICATIONS_LIST,
        AnswerValue::Medications(vec![MedicationEntry::new(
            "Aspirin",
            "81 mg",
            DoseFrequency::OnceDaily,
        )]),
    );
    let summary = summarize_section(&record, Section::Medications);
    assert!(summary.items.is_empty());
    assert_eq!(summary.note.as_deref(), Some(NO_MEDICATIONS));
}

#[test]
fn medication_items_skip_unnamed_entries() {
    let mut record = PatientRecord::new();
    record.put(Section::Medications, medications::TAKING_MEDICATIONS, Response::Yes.into());
    record.put(
        Section::Medications,
        medications::MEDICATIONS_LIST,
        AnswerValue::Medications(vec![
            MedicationEntry::new("Aspirin", "81 mg", DoseFrequency::OnceDaily),
            MedicationEntry::default(),
            MedicationEntry::new("Vitamin D", "", DoseFrequency::Weekly),
        ]),
    );
    let summary = summarize_section(&record, Section::Medications);
    let pairs: Vec<(&str, &str)> = summary
        .items
        .iter()
        .map(|i| (i.label.as_str(), i.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Aspirin", "81 mg (Once daily)"), ("Vitamin D", "(Weekly)")]
    );
}

#[test]
fn demographics_use_placeholders() {
    let mut record = PatientRecord::new();
    record.put(Section::Demographics, demographics::FIRST_NAME, AnswerValue::Text("Rose".into()));
    record.put(
        Section::Demographics,
        demographics::EMERGENCY_NAME,
        AnswerValue::Text("Marc".into()),
    );
    record.put(
        Section::Demographics,
        demographics::EMERGENCY_RELATION,
        AnswerValue::Choice("Son".into()),
    );
    let summary = summarize_section(&record, Section::Demographics);
    let value = |label: &str| {
        summary
            .items
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.value.clone())
            .unwrap()
    };
    assert_eq!(value("Name"), "Rose");
    assert_eq!(value("Phone"), "Not provided");
    assert_eq!(value("Emergency Contact"), "Marc (Son)");
}

#[test]
fn dose_and_frequency_formats() {
    let entry = MedicationEntry::new("Aspirin", " 81 mg ", DoseFrequency::AsNeeded);
    assert_eq!(dose_and_frequency(&entry), "81 mg (As needed)");
}
