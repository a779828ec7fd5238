//! Intake report generation.
//!
//! `generate_report` is a pure function of the record, the options and the
//! generation time. It never fails: missing answers render as placeholders.
//! Every section contributes a heading and exactly one key/value table, in
//! form order, with section-specific paragraphs and bullet lists around it.

use intake_core::fields::{
    adl, cognitive, demographics, iadl, medical_history, medications, symptoms,
};
use intake_core::models::record::PatientRecord;
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_sections::{Questionnaire, get_section};
use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::blocks::{DocumentBlock, IntakeReport, TableRow};
use crate::summary::{
    COGNITIVE_EXCLUSIONS, MEDICAL_HISTORY_EXCLUSIONS, NO_MEDICATIONS, NOT_PROVIDED,
    SYMPTOM_EXCLUSIONS, full_name,
};

pub const DEFAULT_FORM_TITLE: &str = "Geriatric Clinic - Patient Intake Form";
pub const DEFAULT_CLINIC_NAME: &str = "Jewish General Hospital";
pub const ATTESTATION: &str = "This form was completed electronically by the patient.";
pub const NO_CONDITIONS: &str = "No significant medical conditions reported";
pub const NO_ANSWERS: &str = "No answers recorded";
pub const NOT_SPECIFIED: &str = "Not specified";

/// Strings printed in the report's title block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub form_title: String,
    pub clinic_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            form_title: DEFAULT_FORM_TITLE.to_string(),
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
        }
    }
}

pub fn generate_report(
    record: &PatientRecord,
    options: &ReportOptions,
    generated_at: DateTime,
) -> IntakeReport {
    let mut blocks = vec![DocumentBlock::Title {
        title: options.form_title.clone(),
        subtitle: options.clinic_name.clone(),
        generated: format!("Date: {}", generated_at.strftime("%Y-%m-%d %H:%M")),
    }];

    for section in Section::ALL {
        blocks.push(DocumentBlock::SectionHeading {
            text: section.report_heading().to_string(),
        });
        match section {
            Section::Demographics => demographics_blocks(record, &mut blocks),
            Section::Symptoms => symptom_blocks(record, &mut blocks),
            Section::Cognitive => cognitive_blocks(record, &mut blocks),
            Section::Medications => medication_blocks(record, &mut blocks),
            Section::Adl => adl_blocks(record, &mut blocks),
            Section::Iadl => iadl_blocks(record, &mut blocks),
            Section::MedicalHistory => history_blocks(record, &mut blocks),
        }
    }

    blocks.push(DocumentBlock::Paragraph {
        text: format!(
            "Form completed: {}",
            generated_at.strftime("%Y-%m-%d %H:%M:%S")
        ),
    });
    blocks.push(DocumentBlock::Paragraph {
        text: ATTESTATION.to_string(),
    });

    tracing::debug!(blocks = blocks.len(), "intake report generated");
    IntakeReport {
        generated_at,
        blocks,
    }
}

/// Row for `key` under its schema label, if the patient answered it.
fn answered_row(record: &PatientRecord, q: &dyn Questionnaire, key: &str) -> Option<TableRow> {
    let field = q.field(key)?;
    let value = record.get(q.section(), key)?.display();
    if value.trim().is_empty() {
        return None;
    }
    Some(TableRow::new(field.label.as_str(), value))
}

/// Rows for every answered field of `q` whose key is not in `skip`.
fn answered_rows(record: &PatientRecord, q: &dyn Questionnaire, skip: &[&str]) -> Vec<TableRow> {
    q.fields()
        .iter()
        .filter(|field| !skip.contains(&field.key.as_str()))
        .filter_map(|field| answered_row(record, q, &field.key))
        .collect()
}

/// Push the section table, followed by a placeholder when it is empty.
fn push_table(blocks: &mut Vec<DocumentBlock>, rows: Vec<TableRow>) {
    let empty = rows.is_empty();
    blocks.push(DocumentBlock::KeyValueTable { rows });
    if empty {
        blocks.push(DocumentBlock::Paragraph {
            text: NO_ANSWERS.to_string(),
        });
    }
}

fn demographics_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::Demographics;
    let value = |key: &str| -> String {
        record
            .get(section, key)
            .map(|v| v.display())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    };

    let emergency = match record.text(section, demographics::EMERGENCY_NAME) {
        Some(name) => match record.choice(section, demographics::EMERGENCY_RELATION) {
            Some(relation) => format!("{name} ({relation})"),
            None => name.to_string(),
        },
        None => NOT_PROVIDED.to_string(),
    };

    let rows = vec![
        TableRow::new("Name", full_name(record)),
        TableRow::new("Date of Birth", value(demographics::DATE_OF_BIRTH)),
        TableRow::new("Sex", value(demographics::SEX)),
        TableRow::new("Phone", value(demographics::PHONE)),
        TableRow::new("Health Card", value(demographics::HEALTH_CARD)),
        TableRow::new("Emergency Contact", emergency),
        TableRow::new("Emergency Phone", value(demographics::EMERGENCY_PHONE)),
        TableRow::new("Preferred Language", value(demographics::PREFERRED_LANGUAGE)),
    ];
    blocks.push(DocumentBlock::KeyValueTable { rows });
}

fn symptom_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::Symptoms;
    let q = get_section(section);

    let mut rows = Vec::new();
    for field in q.fields() {
        if SYMPTOM_EXCLUSIONS.contains(&field.key.as_str()) {
            continue;
        }
        let Some(row) = answered_row(record, q.as_ref(), &field.key) else {
            continue;
        };
        let row = match field.key.as_str() {
            symptoms::PAIN if record.is(section, symptoms::PAIN, Response::Yes) => {
                pain_details(record, row)
            }
            symptoms::FALLS if record.is(section, symptoms::FALLS, Response::Yes) => {
                match record.integer(section, symptoms::FALLS_COUNT) {
                    Some(count) => row.with_detail(format!("Number of falls: {count}")),
                    None => row,
                }
            }
            _ => row,
        };
        rows.push(row);
    }

    rows.extend(answered_row(record, q.as_ref(), symptoms::OTHER_SYMPTOMS));
    push_table(blocks, rows);
}

fn pain_details(record: &PatientRecord, mut row: TableRow) -> TableRow {
    let section = Section::Symptoms;
    if let Some(location) = record.text(section, symptoms::PAIN_LOCATION) {
        row = row.with_detail(format!("Location: {location}"));
    }
    if let Some(level) = record.integer(section, symptoms::PAIN_LEVEL) {
        row = row.with_detail(format!("Severity: {level}/10"));
    }
    row
}

fn cognitive_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let q = get_section(Section::Cognitive);
    let mut rows = answered_rows(record, q.as_ref(), &COGNITIVE_EXCLUSIONS);
    rows.extend(answered_row(record, q.as_ref(), cognitive::OTHER_CONCERNS));
    push_table(blocks, rows);
}

fn medication_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::Medications;
    let q = get_section(section);
    let taking = record.is(section, medications::TAKING_MEDICATIONS, Response::Yes);

    let mut rows = Vec::new();
    if taking {
        let items: Vec<String> = record
            .medications(section, medications::MEDICATIONS_LIST)
            .unwrap_or_default()
            .iter()
            .filter(|entry| entry.is_named())
            .map(|entry| entry.display_line())
            .collect();
        if !items.is_empty() {
            blocks.push(DocumentBlock::BulletList { items });
        }
        rows.extend(answered_row(record, q.as_ref(), medications::NEEDS_HELP));
        rows.extend(answered_row(record, q.as_ref(), medications::MISS_DOSES));
    } else {
        blocks.push(DocumentBlock::Paragraph {
            text: NO_MEDICATIONS.to_string(),
        });
    }

    if record.is(section, medications::HAS_ALLERGIES, Response::Yes) {
        let allergies = record
            .text(section, medications::ALLERGIES_LIST)
            .unwrap_or(NOT_SPECIFIED);
        rows.push(TableRow::new("Drug allergies", allergies));
    }

    blocks.push(DocumentBlock::KeyValueTable { rows });
}

fn adl_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::Adl;
    let q = get_section(section);
    let mut rows = answered_rows(
        record,
        q.as_ref(),
        &[adl::USES_MOBILITY_AIDS, adl::MOBILITY_AIDS_LIST],
    );

    if record.is(section, adl::USES_MOBILITY_AIDS, Response::Yes) {
        let aids = record
            .multi_choice(section, adl::MOBILITY_AIDS_LIST)
            .filter(|aids| !aids.is_empty())
            .map(|aids| aids.join(", "))
            .unwrap_or_else(|| NOT_SPECIFIED.to_string());
        rows.push(TableRow::new("Mobility aids", aids));
    }

    push_table(blocks, rows);
}

fn iadl_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::Iadl;
    let q = get_section(section);
    let mut rows = answered_rows(
        record,
        q.as_ref(),
        &[iadl::HAS_CAREGIVER, iadl::CAREGIVER_RELATION],
    );

    if record.is(section, iadl::HAS_CAREGIVER, Response::Yes) {
        let relation = record
            .text(section, iadl::CAREGIVER_RELATION)
            .unwrap_or("Yes");
        rows.push(TableRow::new("Caregiver", relation));
    }

    push_table(blocks, rows);
}

fn history_blocks(record: &PatientRecord, blocks: &mut Vec<DocumentBlock>) {
    let section = Section::MedicalHistory;
    let q = get_section(section);

    let conditions: Vec<String> = q
        .fields()
        .iter()
        .filter(|field| !MEDICAL_HISTORY_EXCLUSIONS.contains(&field.key.as_str()))
        .filter(|field| record.is(section, &field.key, Response::Yes))
        .map(|field| field.label.clone())
        .collect();

    if conditions.is_empty() {
        blocks.push(DocumentBlock::Paragraph {
            text: NO_CONDITIONS.to_string(),
        });
    } else {
        blocks.push(DocumentBlock::BulletList { items: conditions });
    }

    let mut rows = Vec::new();
    let detail = |key: &str| {
        record
            .text(section, key)
            .unwrap_or(NOT_SPECIFIED)
            .to_string()
    };
    if record.is(section, medical_history::HAD_SURGERIES, Response::Yes) {
        rows.push(TableRow::new(
            "Past surgeries",
            detail(medical_history::SURGERIES_LIST),
        ));
    }
    if record.is(section, medical_history::HOSPITALIZED_PAST_YEAR, Response::Yes) {
        rows.push(TableRow::new(
            "Recent hospitalization",
            detail(medical_history::HOSPITALIZATION_REASON),
        ));
    }
    rows.extend(answered_row(
        record,
        q.as_ref(),
        medical_history::OTHER_CONDITIONS,
    ));

    blocks.push(DocumentBlock::KeyValueTable { rows });
}
