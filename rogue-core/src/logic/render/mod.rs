//! Report Renderer
//!
//! Turns projected rows into text for a sink. A report is a list of titled
//! sections; every format renders them in order.

pub mod table;
pub mod html;
pub mod delimited;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::logic::projection::ProjectedRecord;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Coloured UTF-8 table for a terminal
    Console,
    /// ASCII table for attachments and plain-text mail
    Plain,
    Html,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Console => "console",
            ReportFormat::Plain => "plain",
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(ReportFormat::Console),
            "plain" | "text" | "txt" => Ok(ReportFormat::Plain),
            "html" => Ok(ReportFormat::Html),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub records: Vec<ProjectedRecord>,
}

impl ReportSection {
    pub fn new(title: impl Into<String>, records: Vec<ProjectedRecord>) -> Self {
        Self {
            title: title.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Render every section in `format`
pub fn render(sections: &[ReportSection], format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Console => Ok(table::render_sections(sections, table::Style::Console)),
        ReportFormat::Plain => Ok(table::render_sections(sections, table::Style::Plain)),
        ReportFormat::Html => Ok(html::render_document(sections)),
        ReportFormat::Csv => delimited::render_sections(sections, b','),
    }
}

/// Render bare rows, no title
pub fn render_records(records: &[ProjectedRecord], format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Console => Ok(table::render_table(records, table::Style::Console)),
        ReportFormat::Plain => Ok(table::render_table(records, table::Style::Plain)),
        ReportFormat::Html => Ok(html::render_table(records)),
        ReportFormat::Csv => delimited::render_records(records, b','),
    }
}

/// Union of columns across rows, first-appearance order
pub(crate) fn columns(records: &[ProjectedRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for column in record.columns() {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.to_string());
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests;
