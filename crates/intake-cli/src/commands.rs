use std::path::{Path, PathBuf};

use eyre::WrapErr;
use intake_core::models::record::PatientRecord;
use intake_core::models::section::Section;
use intake_core::naming;
use intake_export::docx::generate_docx;
use intake_export::render::render_report;
use intake_export::report::generate_report;
use intake_export::summary::summarize;
use intake_sections::{all_sections, get_section};
use intake_session::{IntakeEvent, IntakeSession, reduce};
use jiff::civil::DateTime;

use crate::cli::{ConfigCommand, RunArgs, SchemaArgs, ScriptArgs};
use crate::config::{self, IntakeConfig};

/// Which artifacts to write next to the DOCX.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportFormats {
    pub markdown: bool,
    pub json: bool,
}

/// Apply every event of a JSON script to a fresh session.
pub fn replay(script: &str) -> eyre::Result<IntakeSession> {
    let events = IntakeEvent::parse_script(script)?;
    let mut session = IntakeSession::new();
    for (position, event) in events.into_iter().enumerate() {
        session = reduce(session, event).wrap_err_with(|| format!("event {position} rejected"))?;
    }
    tracing::info!(
        session = %session.id(),
        step = session.step().title(),
        submitted = session.is_submitted(),
        "script replayed"
    );
    Ok(session)
}

fn replay_file(path: &Path) -> eyre::Result<IntakeSession> {
    let script = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read events at {}: {e}", path.display()))?;
    replay(&script)
}

/// Write the report for `record` into `out_dir`. Returns the written paths,
/// DOCX first.
pub fn export(
    record: &PatientRecord,
    config: &IntakeConfig,
    out_dir: &Path,
    generated_at: DateTime,
    formats: ExportFormats,
) -> eyre::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;

    let report = generate_report(record, &config.report_options(), generated_at);
    let bytes = generate_docx(&report, &config.styles)?;

    let mut written = Vec::new();
    let docx_path = out_dir.join(naming::report_docx(generated_at));
    std::fs::write(&docx_path, bytes)?;
    written.push(docx_path);

    if formats.markdown {
        let path = out_dir.join(naming::report_markdown(generated_at));
        std::fs::write(&path, render_report(&report)?)?;
        written.push(path);
    }
    if formats.json {
        let path = out_dir.join(naming::report_json(generated_at));
        std::fs::write(&path, report.to_json()?)?;
        written.push(path);
    }

    tracing::info!(dir = %out_dir.display(), files = written.len(), "report exported");
    Ok(written)
}

pub fn run(args: &RunArgs) -> eyre::Result<()> {
    let config = config::load_or_default()?;
    let session = replay_file(&args.script.events)?;

    if !session.is_submitted() {
        tracing::warn!(session = %session.id(), "exporting a form that was never submitted");
    }

    let out_dir = args
        .out
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let generated_at = jiff::Zoned::now().datetime();
    let formats = ExportFormats {
        markdown: args.markdown,
        json: args.json,
    };

    for path in export(session.record(), &config, &out_dir, generated_at, formats)? {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn summary(args: &ScriptArgs) -> eyre::Result<()> {
    let session = replay_file(&args.events)?;
    for section in summarize(session.record()) {
        println!("{}", section.title);
        for item in &section.items {
            println!("  - {}: {}", item.label, item.value);
        }
        if let Some(note) = &section.note {
            println!("  {note}");
        }
    }
    Ok(())
}

pub fn schema(args: &SchemaArgs) -> eyre::Result<()> {
    let sections = match &args.section {
        Some(id) => vec![get_section(id.parse::<Section>()?)],
        None => all_sections(),
    };

    let json: Vec<serde_json::Value> = sections
        .iter()
        .map(|q| {
            serde_json::json!({
                "section": q.section(),
                "title": q.title(),
                "introduction": q.introduction(),
                "fields": q.fields(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

pub fn questions() -> eyre::Result<()> {
    for q in all_sections() {
        println!("{}", q.to_question_sheet());
    }
    Ok(())
}

pub fn config(command: &ConfigCommand) -> eyre::Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init => {
            if config::has_config() {
                println!("{}", config::config_path()?.display());
                tracing::info!("config already exists, leaving it untouched");
                return Ok(());
            }
            let path = config::save_config(&IntakeConfig::new())?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
