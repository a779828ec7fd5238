use intake_cli::commands::{ExportFormats, export, replay};
use intake_cli::config::IntakeConfig;
use intake_core::fields::symptoms;
use intake_core::models::section::Section;

const SCRIPT: &str = r#"[
    {"type": "answer", "section": "demographics", "key": "first_name", "value": {"type": "text", "value": "Rose"}},
    {"type": "answer", "section": "symptoms", "key": "pain", "value": {"type": "response", "value": "yes"}},
    {"type": "answer", "section": "symptoms", "key": "pain_location", "value": {"type": "text", "value": "lower back"}},
    {"type": "answer", "section": "symptoms", "key": "pain_level", "value": {"type": "integer", "value": 7}},
    {"type": "advance"}, {"type": "advance"}, {"type": "advance"}, {"type": "advance"},
    {"type": "advance"}, {"type": "advance"}, {"type": "advance"},
    {"type": "confirm", "confirmed": true},
    {"type": "submit"}
]"#;

#[test]
fn replay_reaches_submission() {
    let session = replay(SCRIPT).unwrap();
    assert!(session.is_submitted());
    assert_eq!(
        session.record().text(Section::Symptoms, symptoms::PAIN_LOCATION),
        Some("lower back")
    );
}

#[test]
fn replay_reports_rejected_event() {
    let script = r#"[{"type": "answer", "section": "symptoms", "key": "pain_level", "value": {"type": "integer", "value": 12}}]"#;
    let err = replay(script).unwrap_err();
    assert!(format!("{err:#}").contains("event 0 rejected"));
}

#[test]
fn export_writes_named_files() {
    let session = replay(SCRIPT).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let generated_at = jiff::civil::date(2025, 3, 14).at(9, 30, 5, 0);

    let written = export(
        session.record(),
        &IntakeConfig::new(),
        dir.path(),
        generated_at,
        ExportFormats {
            markdown: true,
            json: true,
        },
    )
    .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "patient_intake_20250314_093005.docx",
            "patient_intake_20250314_093005.md",
            "patient_intake_20250314_093005.json",
        ]
    );

    let markdown = std::fs::read_to_string(&written[1]).unwrap();
    assert!(markdown.contains("**Name:** Rose"));
    assert!(markdown.contains("  - Severity: 7/10"));
}
