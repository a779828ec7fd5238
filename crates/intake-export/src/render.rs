use tera::{Context, Tera};

use crate::blocks::IntakeReport;
use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "intake.md";

/// Built-in report layout: a Markdown-ish text export of the report.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/intake.md.tera");

/// Render a report with the built-in template.
pub fn render_report(report: &IntakeReport) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, report)
}

/// Render a Tera template with an IntakeReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// report's `generated_at` and `blocks` become the template context, with
/// multi-line strings folded onto one line. Names ending in `.html` or `.xml`
/// are autoescaped by Tera.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &IntakeReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut value = serde_json::to_value(report)?;
    fold_lines(&mut value);
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Join the lines of every multi-line string with `"; "`, dropping blank
/// lines, so answer text cannot start a new line of the layout.
fn fold_lines(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::String(text) if text.contains(['\n', '\r']) => {
            *text = text
                .split(['\n', '\r'])
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("; ");
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(fold_lines),
        serde_json::Value::Object(map) => map.values_mut().for_each(fold_lines),
        _ => {}
    }
}
