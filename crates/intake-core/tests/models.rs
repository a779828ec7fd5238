use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::{DoseFrequency, MedicationEntry};
use intake_core::models::record::PatientRecord;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_core::naming;

#[test]
fn sections_are_indexed_in_form_order() {
    for (i, section) in Section::ALL.iter().enumerate() {
        assert_eq!(section.index(), i);
        assert_eq!(Section::from_index(i), Some(*section));
    }
    assert_eq!(Section::from_index(7), None);
}

#[test]
fn section_parses_from_its_id() {
    assert_eq!("medical_history".parse::<Section>().unwrap(), Section::MedicalHistory);
    assert_eq!("ADL".parse::<Section>().unwrap(), Section::Adl);
    assert!("review".parse::<Section>().is_err());
}

#[test]
fn section_serializes_as_snake_case() {
    let json = serde_json::to_string(&Section::MedicalHistory).unwrap();
    assert_eq!(json, "\"medical_history\"");
}

#[test]
fn medication_line_omits_blank_dose() {
    let with_dose = MedicationEntry::new("Metformin", "500mg", DoseFrequency::TwiceDaily);
    assert_eq!(with_dose.display_line(), "Metformin 500mg (Twice daily)");

    let without_dose = MedicationEntry::new("Aspirin", "  ", DoseFrequency::OnceDaily);
    assert_eq!(without_dose.display_line(), "Aspirin (Once daily)");
}

#[test]
fn default_medication_entry_is_unnamed_once_daily() {
    let entry = MedicationEntry::default();
    assert!(!entry.is_named());
    assert_eq!(entry.frequency, DoseFrequency::ALL[0]);
}

#[test]
fn record_treats_blank_text_as_absent() {
    let mut record = PatientRecord::new();
    record.put(Section::Symptoms, "other_symptoms", AnswerValue::Text("   ".to_string()));
    assert_eq!(record.text(Section::Symptoms, "other_symptoms"), None);
    assert!(record.get(Section::Symptoms, "other_symptoms").is_some());
}

#[test]
fn record_put_overwrites() {
    let mut record = PatientRecord::new();
    record.put(Section::Symptoms, "pain", Response::Yes.into());
    record.put(Section::Symptoms, "pain", Response::No.into());
    assert!(record.is(Section::Symptoms, "pain", Response::No));
    assert_eq!(record.section(Section::Symptoms).map(|s| s.len()), Some(1));
}

#[test]
fn record_round_trips_through_json() {
    let mut record = PatientRecord::new();
    record.put(
        Section::Demographics,
        "date_of_birth",
        AnswerValue::Date(jiff::civil::date(1942, 3, 14)),
    );
    record.put(
        Section::Medications,
        "medications_list",
        AnswerValue::Medications(vec![MedicationEntry::new(
            "Ramipril",
            "5mg",
            DoseFrequency::OnceDaily,
        )]),
    );

    let json = record.to_json().unwrap();
    assert_eq!(PatientRecord::from_json(&json).unwrap(), record);
}

#[test]
fn report_stem_uses_compact_timestamp() {
    let at = jiff::civil::date(2025, 2, 3).at(9, 5, 7, 0);
    assert_eq!(naming::report_stem(at), "patient_intake_20250203_090507");
    assert_eq!(naming::report_docx(at), "patient_intake_20250203_090507.docx");
}
