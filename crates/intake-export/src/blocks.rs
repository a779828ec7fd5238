use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One labelled line of a section table. `details` are indented sub-lines
/// that belong to this row (e.g. pain location under "Pain").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TableRow {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl TableRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

/// Renderer-agnostic unit of report output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentBlock {
    Title {
        title: String,
        subtitle: String,
        generated: String,
    },
    SectionHeading {
        text: String,
    },
    KeyValueTable {
        rows: Vec<TableRow>,
    },
    Paragraph {
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
}

/// A generated intake report: the blocks in reading order plus the moment
/// they were generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeReport {
    pub generated_at: DateTime,
    pub blocks: Vec<DocumentBlock>,
}

impl IntakeReport {
    /// Suggested file name stem, `patient_intake_<YYYYMMDD_HHMMSS>`.
    pub fn file_stem(&self) -> String {
        intake_core::naming::report_stem(self.generated_at)
    }

    pub fn tables(&self) -> impl Iterator<Item = &[TableRow]> {
        self.blocks.iter().filter_map(|block| match block {
            DocumentBlock::KeyValueTable { rows } => Some(rows.as_slice()),
            _ => None,
        })
    }

    /// Find a table row by label anywhere in the report.
    pub fn row(&self, label: &str) -> Option<&TableRow> {
        self.tables().flatten().find(|row| row.label == label)
    }

    pub fn to_json(&self) -> Result<String, crate::error::ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
