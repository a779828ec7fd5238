use std::collections::HashSet;

use intake_core::fields::{adl, demographics, medications, symptoms};
use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::MedicationEntry;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_sections::error::SchemaError;
use intake_sections::{all_sections, get_section};

fn today() -> jiff::civil::Date {
    jiff::civil::date(2025, 6, 1)
}

#[test]
fn registry_covers_every_section_in_order() {
    let sections: Vec<Section> = all_sections().iter().map(|q| q.section()).collect();
    assert_eq!(sections, Section::ALL.to_vec());
}

#[test]
fn field_keys_are_unique_within_each_section() {
    for questionnaire in all_sections() {
        let mut seen = HashSet::new();
        for field in questionnaire.fields() {
            assert!(
                seen.insert(field.key.as_str()),
                "duplicate key {} in {}",
                field.key,
                questionnaire.section()
            );
        }
    }
}

#[test]
fn symptom_screening_precedes_follow_ups() {
    let q = get_section(Section::Symptoms);
    let keys: Vec<&str> = q.fields().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys[0], symptoms::PAIN);
    assert_eq!(keys[9], symptoms::FALLS);
    assert_eq!(keys.last().copied(), Some(symptoms::OTHER_SYMPTOMS));
}

#[test]
fn unknown_key_is_rejected() {
    let q = get_section(Section::Symptoms);
    let err = q
        .check_answer("headache", Response::Yes.into(), today())
        .unwrap_err();
    assert!(matches!(err, SchemaError::UnknownField { section: Section::Symptoms, .. }));
}

#[test]
fn response_outside_scale_is_rejected() {
    let q = get_section(Section::Symptoms);
    assert!(q.check_answer(symptoms::PAIN, Response::NotSure.into(), today()).is_ok());
    assert!(q.check_answer(symptoms::PAIN, Response::Sometimes.into(), today()).is_err());

    let adl = get_section(Section::Adl);
    assert!(adl.check_answer(adl::BATHING, Response::Dependent.into(), today()).is_ok());
    assert!(adl.check_answer(adl::BATHING, Response::Unable.into(), today()).is_err());
}

#[test]
fn wrong_variant_is_rejected() {
    let q = get_section(Section::Symptoms);
    let err = q
        .check_answer(symptoms::PAIN_LEVEL, AnswerValue::Text("7".to_string()), today())
        .unwrap_err();
    assert!(err.to_string().contains("expected integer"));
}

#[test]
fn integer_bounds_are_inclusive() {
    let q = get_section(Section::Symptoms);
    assert!(q.check_answer(symptoms::PAIN_LEVEL, AnswerValue::Integer(0), today()).is_ok());
    assert!(q.check_answer(symptoms::PAIN_LEVEL, AnswerValue::Integer(10), today()).is_ok());
    assert!(q.check_answer(symptoms::PAIN_LEVEL, AnswerValue::Integer(11), today()).is_err());
    assert!(q.check_answer(symptoms::FALLS_COUNT, AnswerValue::Integer(0), today()).is_err());

    let meds = get_section(Section::Medications);
    assert!(meds.check_answer(medications::NUM_MEDICATIONS, AnswerValue::Integer(30), today()).is_ok());
    assert!(meds.check_answer(medications::NUM_MEDICATIONS, AnswerValue::Integer(31), today()).is_err());
}

#[test]
fn birth_date_must_fall_between_1900_and_today() {
    let q = get_section(Section::Demographics);
    let check = |d| q.check_answer(demographics::DATE_OF_BIRTH, AnswerValue::Date(d), today());

    assert!(check(jiff::civil::date(1900, 1, 1)).is_ok());
    assert!(check(today()).is_ok());
    assert!(check(jiff::civil::date(1899, 12, 31)).is_err());
    assert!(check(jiff::civil::date(2025, 6, 2)).is_err());
}

#[test]
fn choice_must_be_a_declared_option() {
    let q = get_section(Section::Demographics);
    let ok = AnswerValue::Choice("Prefer not to say".to_string());
    let bad = AnswerValue::Choice("Unknown".to_string());
    assert!(q.check_answer(demographics::SEX, ok, today()).is_ok());
    assert!(q.check_answer(demographics::SEX, bad, today()).is_err());
}

#[test]
fn multi_choice_is_canonicalized() {
    let q = get_section(Section::Adl);
    let selected = AnswerValue::MultiChoice(vec![
        "Walker".to_string(),
        "Cane".to_string(),
        "Walker".to_string(),
    ]);
    let accepted = q
        .check_answer(adl::MOBILITY_AIDS_LIST, selected, today())
        .unwrap();
    assert_eq!(
        accepted,
        AnswerValue::MultiChoice(vec!["Cane".to_string(), "Walker".to_string()])
    );

    let unknown = AnswerValue::MultiChoice(vec!["Crutches".to_string()]);
    assert!(q.check_answer(adl::MOBILITY_AIDS_LIST, unknown, today()).is_err());
}

#[test]
fn medication_list_is_capped() {
    let q = get_section(Section::Medications);
    let list = vec![MedicationEntry::default(); 31];
    assert!(q
        .check_answer(medications::MEDICATIONS_LIST, AnswerValue::Medications(list), today())
        .is_err());
}

#[test]
fn question_sheet_lists_every_question() {
    let q = get_section(Section::Adl);
    let sheet = q.to_question_sheet();
    assert!(sheet.starts_with("## Daily Activities (Basic)"));
    assert_eq!(sheet.matches("\n- ").count(), q.fields().len());
}

#[test]
fn schema_serializes_for_the_host() {
    let q = get_section(Section::Cognitive);
    let json = serde_json::to_value(q.fields()).unwrap();
    assert_eq!(json[0]["kind"]["type"], "date");
    assert_eq!(json[6]["kind"]["scale"], "yes_no_sometimes");
}
