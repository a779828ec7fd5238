use intake_cli::config::{CURRENT_VERSION, IntakeConfig, load_config_from, migrate, save_config_to};
use intake_export::report::DEFAULT_FORM_TITLE;
use intake_export::styles::DocumentStyles;

#[test]
fn unversioned_config_gains_styles_and_title() {
    let unversioned = serde_json::json!({
        "clinic_name": "Riverside",
        "created_at": "2024-01-05T10:00:00Z"
    });
    let migrated = migrate(unversioned, 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["form_title"], DEFAULT_FORM_TITLE);

    let config: IntakeConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.clinic_name, "Riverside");
    assert_eq!(config.styles, DocumentStyles::default());
    assert!(config.output_dir.is_none());
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(serde_json::json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2]), 0).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = IntakeConfig::new();
    config.clinic_name = "Riverside".to_string();
    config.config_version = 0;

    let path = save_config_to(dir.path(), &config).unwrap();
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.clinic_name, "Riverside");
    assert_eq!(loaded.created_at, config.created_at);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn report_options_follow_config() {
    let mut config = IntakeConfig::new();
    config.form_title = "Memory Clinic Intake".to_string();
    let options = config.report_options();
    assert_eq!(options.form_title, "Memory Clinic Intake");
    assert_eq!(options.clinic_name, config.clinic_name);
}
