//! Delimited text (CSV)

use super::{columns, ReportSection};
use crate::error::{ReportError, ReportResult};
use crate::logic::projection::ProjectedRecord;

/// Sections separated by a blank line, each preceded by `# <title>`
pub fn render_sections(sections: &[ReportSection], delimiter: u8) -> ReportResult<String> {
    let mut out = String::new();
    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str("# ");
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&render_records(&section.records, delimiter)?);
    }
    Ok(out)
}

pub fn render_records(records: &[ProjectedRecord], delimiter: u8) -> ReportResult<String> {
    let columns = columns(records);
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    if !columns.is_empty() {
        wtr.write_record(&columns)?;
    }
    for record in records {
        wtr.write_record(columns.iter().map(|c| record.cell(c)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Render(e.to_string()))
}
