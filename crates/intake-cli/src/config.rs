use std::path::{Path, PathBuf};

use intake_export::report::{DEFAULT_CLINIC_NAME, DEFAULT_FORM_TITLE, ReportOptions};
use intake_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Schema version. Missing or 0 = a file written without a version.
    #[serde(default)]
    pub config_version: u32,
    pub clinic_name: String,
    pub form_title: String,
    /// Where exported reports are written. Defaults to the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Files without a version get the default styles.
    #[serde(default)]
    pub styles: DocumentStyles,
    pub created_at: jiff::Timestamp,
}

impl IntakeConfig {
    pub fn new() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
            form_title: DEFAULT_FORM_TITLE.to_string(),
            output_dir: None,
            styles: DocumentStyles::default(),
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            form_title: self.form_title.clone(),
            clinic_name: self.clinic_name.clone(),
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("org.geriatric-intake"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<IntakeConfig> {
    load_config_from(&config_path()?)
}

/// Load the saved config, or the built-in defaults when none exists yet.
pub fn load_or_default() -> eyre::Result<IntakeConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config on disk, using defaults");
        Ok(IntakeConfig::new())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<IntakeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: IntakeConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update the intake tool."
        ));
    }

    // Unversioned (hand-written) files: fill in the fields a saved config always has
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("styles")
            .or_insert(serde_json::to_value(DocumentStyles::default())?);
        obj.entry("form_title")
            .or_insert(serde_json::Value::String(DEFAULT_FORM_TITLE.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("stamped unversioned config as v1 (added styles, form_title)");
    }

    Ok(json)
}

pub fn save_config(config: &IntakeConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &IntakeConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
