//! Text tables (comfy-table)

use comfy_table::presets::{ASCII_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use super::{columns, ReportSection};
use crate::constants::EMPTY_SECTION_TEXT;
use crate::logic::projection::ProjectedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Console,
    Plain,
}

pub fn render_sections(sections: &[ReportSection], style: Style) -> String {
    let mut out = String::new();
    for section in sections {
        out.push('\n');
        out.push_str(&section.title);
        out.push('\n');
        if section.is_empty() {
            out.push_str(EMPTY_SECTION_TEXT);
        } else {
            out.push_str(&render_table(&section.records, style));
        }
        out.push('\n');
    }
    out
}

pub fn render_table(records: &[ProjectedRecord], style: Style) -> String {
    let columns = columns(records);
    let mut table = Table::new();

    match style {
        Style::Console => {
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(
                columns
                    .iter()
                    .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
            );
        }
        Style::Plain => {
            table.load_preset(ASCII_FULL);
            table.force_no_tty();
            table.set_header(columns.iter().map(Cell::new));
        }
    }

    for record in records {
        table.add_row(columns.iter().map(|column| {
            let cell = Cell::new(record.cell(column));
            match (style, column_color(column)) {
                (Style::Console, Some(color)) => cell.fg(color),
                _ => cell,
            }
        }));
    }

    for (idx, column) in columns.iter().enumerate() {
        if matches!(column.as_str(), "Type" | "Signal") {
            if let Some(col) = table.column_mut(idx) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

fn column_color(column: &str) -> Option<Color> {
    match column {
        "Type" => Some(Color::Cyan),
        "Rogue SSID" | "Signal" => Some(Color::Green),
        "BSSID" => Some(Color::Yellow),
        _ => None,
    }
}
