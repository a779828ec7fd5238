use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::blocks::{DocumentBlock, IntakeReport, TableRow};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Left indent for detail lines, in twentieths of a point.
const DETAIL_INDENT: i32 = 720;

/// Generate a DOCX document from the report blocks.
///
/// Layout per block:
/// - title → Heading 1, then the clinic and date lines
/// - section heading → Heading 2
/// - table row → `Label:` in bold followed by the value, with each detail as
///   an indented line beneath it
/// - bullet list → one bulleted paragraph per item
/// - paragraph → body text
///
/// Answer text is written verbatim; line breaks inside a value stay inside
/// that value's paragraph.
pub fn generate_docx(report: &IntakeReport, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for block in &report.blocks {
        docx = match block {
            DocumentBlock::Title {
                title,
                subtitle,
                generated,
            } => docx
                .add_paragraph(heading_paragraph(title, "Heading1", styles))
                .add_paragraph(body_paragraph(subtitle, styles))
                .add_paragraph(body_paragraph(generated, styles)),
            DocumentBlock::SectionHeading { text } => {
                docx.add_paragraph(heading_paragraph(text, "Heading2", styles))
            }
            DocumentBlock::KeyValueTable { rows } => rows
                .iter()
                .fold(docx, |docx, row| add_row(docx, row, styles)),
            DocumentBlock::Paragraph { text } => docx.add_paragraph(body_paragraph(text, styles)),
            DocumentBlock::BulletList { items } => items.iter().fold(docx, |docx, item| {
                docx.add_paragraph(bullet_paragraph(item, styles))
            }),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(
        blocks = report.blocks.len(),
        bytes = bytes.len(),
        "docx packed"
    );
    Ok(bytes)
}

fn add_row(docx: Docx, row: &TableRow, styles: &DocumentStyles) -> Docx {
    let line = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(&format!("{}: ", row.label), styles).bold())
        .add_run(body_run(&row.value, styles));

    row.details
        .iter()
        .fold(docx.add_paragraph(line), |docx, detail| {
            docx.add_paragraph(detail_paragraph(detail, styles))
        })
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles))
        .add_run(body_run(text, styles))
}

fn detail_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .indent(Some(DETAIL_INDENT), None, None, None)
        .add_run(body_run("\u{2013} ", styles))
        .add_run(body_run(text, styles))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles))
}

/// A body-styled run; embedded newlines become soft line breaks.
fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    let mut run = Run::new()
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}
