//! Review-step summary.
//!
//! For each section, the answers that need a clinician's attention, as
//! `(label, value)` pairs in field declaration order. Computed on demand from
//! the record; nothing here is stored.

use intake_core::fields::{cognitive, demographics, iadl, medical_history, medications, symptoms};
use intake_core::models::medication::MedicationEntry;
use intake_core::models::record::PatientRecord;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_sections::get_section;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const NOT_PROVIDED: &str = "Not provided";
pub const NO_MEDICATIONS: &str = "No medications reported";

pub const SYMPTOM_EXCLUSIONS: [&str; 4] = [
    symptoms::PAIN_LOCATION,
    symptoms::PAIN_LEVEL,
    symptoms::FALLS_COUNT,
    symptoms::OTHER_SYMPTOMS,
];

pub const COGNITIVE_EXCLUSIONS: [&str; 7] = [
    cognitive::TODAY_DATE,
    cognitive::DAY_OF_WEEK,
    cognitive::SEASON,
    cognitive::CURRENT_YEAR,
    cognitive::HOSPITAL_NAME,
    cognitive::CITY,
    cognitive::OTHER_CONCERNS,
];

pub const IADL_EXCLUSIONS: [&str; 3] = [
    iadl::LIVING_SITUATION,
    iadl::HAS_CAREGIVER,
    iadl::CAREGIVER_RELATION,
];

pub const MEDICAL_HISTORY_EXCLUSIONS: [&str; 5] = [
    medical_history::HAD_SURGERIES,
    medical_history::HOSPITALIZED_PAST_YEAR,
    medical_history::SURGERIES_LIST,
    medical_history::HOSPITALIZATION_REASON,
    medical_history::OTHER_CONDITIONS,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

impl SummaryItem {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Summary of one section. `note` carries the fixed sentence shown when the
/// section has nothing notable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSummary {
    pub section: Section,
    pub title: String,
    pub items: Vec<SummaryItem>,
    pub note: Option<String>,
}

/// Which responses count as notable in a section, and which keys never
/// surface in its summary.
struct Filter {
    notable: &'static [Response],
    excluded: &'static [&'static str],
    empty: &'static str,
}

fn filter(section: Section) -> Option<Filter> {
    let filter = match section {
        Section::Symptoms => Filter {
            notable: &[Response::Yes],
            excluded: &SYMPTOM_EXCLUSIONS,
            empty: "No significant symptoms reported",
        },
        Section::Cognitive => Filter {
            notable: &[Response::Yes, Response::Sometimes],
            excluded: &COGNITIVE_EXCLUSIONS,
            empty: "No memory or thinking concerns reported",
        },
        Section::Adl => Filter {
            notable: &[Response::NeedsAssistance, Response::Dependent],
            excluded: &[],
            empty: "Independent in all basic activities",
        },
        Section::Iadl => Filter {
            notable: &[Response::NeedsAssistance, Response::Unable],
            excluded: &IADL_EXCLUSIONS,
            empty: "Independent in all complex activities",
        },
        Section::MedicalHistory => Filter {
            notable: &[Response::Yes],
            excluded: &MEDICAL_HISTORY_EXCLUSIONS,
            empty: "No significant medical conditions reported",
        },
        Section::Demographics | Section::Medications => return None,
    };
    Some(filter)
}

/// Keys a section's summary never shows.
pub fn excluded_keys(section: Section) -> &'static [&'static str] {
    filter(section).map(|f| f.excluded).unwrap_or(&[])
}

/// `food_prep` -> `Food Prep`.
pub fn display_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Summaries for all seven sections, in form order.
pub fn summarize(record: &PatientRecord) -> Vec<SectionSummary> {
    Section::ALL
        .into_iter()
        .map(|section| summarize_section(record, section))
        .collect()
}

pub fn summarize_section(record: &PatientRecord, section: Section) -> SectionSummary {
    let (items, empty) = match section {
        Section::Demographics => (demographic_items(record), None),
        Section::Medications => (medication_items(record), Some(NO_MEDICATIONS)),
        _ => match filter(section) {
            Some(filter) => (notable_items(record, section, &filter), Some(filter.empty)),
            None => (Vec::new(), None),
        },
    };

    let note = if items.is_empty() {
        empty.map(str::to_string)
    } else {
        None
    };

    SectionSummary {
        section,
        title: section.title().to_string(),
        items,
        note,
    }
}

fn notable_items(record: &PatientRecord, section: Section, filter: &Filter) -> Vec<SummaryItem> {
    get_section(section)
        .fields()
        .iter()
        .filter(|field| !filter.excluded.contains(&field.key.as_str()))
        .filter_map(|field| {
            let response = record.response(section, &field.key)?;
            filter
                .notable
                .contains(&response)
                .then(|| SummaryItem::new(display_label(&field.key), response.label()))
        })
        .collect()
}

fn medication_items(record: &PatientRecord) -> Vec<SummaryItem> {
    if !record.is(Section::Medications, medications::TAKING_MEDICATIONS, Response::Yes) {
        return Vec::new();
    }
    record
        .medications(Section::Medications, medications::MEDICATIONS_LIST)
        .unwrap_or_default()
        .iter()
        .filter(|entry| entry.is_named())
        .map(|entry| SummaryItem::new(entry.name.trim(), dose_and_frequency(entry)))
        .collect()
}

/// `10 mg (Twice daily)`, or just `(Twice daily)` when the dose is unknown.
pub fn dose_and_frequency(entry: &MedicationEntry) -> String {
    let dose = entry.dose.trim();
    if dose.is_empty() {
        format!("({})", entry.frequency.label())
    } else {
        format!("{dose} ({})", entry.frequency.label())
    }
}

fn demographic_items(record: &PatientRecord) -> Vec<SummaryItem> {
    let section = Section::Demographics;
    let text = |key: &str| {
        record
            .text(section, key)
            .or_else(|| record.choice(section, key))
            .map(str::to_string)
    };

    let emergency = match (
        text(demographics::EMERGENCY_NAME),
        text(demographics::EMERGENCY_RELATION),
    ) {
        (Some(name), Some(relation)) => format!("{name} ({relation})"),
        (Some(name), None) => name,
        (None, _) => NOT_PROVIDED.to_string(),
    };

    vec![
        SummaryItem::new("Name", full_name(record)),
        SummaryItem::new(
            "Date of Birth",
            record
                .date(section, demographics::DATE_OF_BIRTH)
                .map(|d| d.to_string())
                .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        ),
        SummaryItem::new(
            "Sex",
            text(demographics::SEX).unwrap_or_else(|| NOT_PROVIDED.to_string()),
        ),
        SummaryItem::new(
            "Phone",
            text(demographics::PHONE).unwrap_or_else(|| NOT_PROVIDED.to_string()),
        ),
        SummaryItem::new(
            "Health Card",
            text(demographics::HEALTH_CARD).unwrap_or_else(|| NOT_PROVIDED.to_string()),
        ),
        SummaryItem::new("Emergency Contact", emergency),
    ]
}

/// First and last name joined, or the placeholder when both are blank.
pub fn full_name(record: &PatientRecord) -> String {
    let parts: Vec<&str> = [demographics::FIRST_NAME, demographics::LAST_NAME]
        .iter()
        .filter_map(|key| record.text(Section::Demographics, key))
        .map(str::trim)
        .collect();
    if parts.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        parts.join(" ")
    }
}
