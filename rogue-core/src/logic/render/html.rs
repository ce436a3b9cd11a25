//! HTML report for e-mail bodies and saved files

use super::{columns, ReportSection};
use crate::constants::EMPTY_SECTION_TEXT;
use crate::logic::projection::ProjectedRecord;

const STYLE: &str = "body{font-family:Arial,Helvetica,sans-serif;font-size:13px}\
table{border-collapse:collapse;margin-bottom:24px}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f2f2f2}";

/// Full document with one heading + table per section
pub fn render_document(sections: &[ReportSection]) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Rogue AP Report</title>\n<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");

    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n", html_escape(&section.title)));
        if section.is_empty() {
            out.push_str(&format!("<p>{}</p>\n", EMPTY_SECTION_TEXT));
        } else {
            out.push_str(&render_table(&section.records));
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// A bare `<table>`
pub fn render_table(records: &[ProjectedRecord]) -> String {
    let columns = columns(records);
    let mut out = String::from("<table>\n<thead><tr>");
    for column in &columns {
        out.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for record in records {
        out.push_str("<tr>");
        for column in &columns {
            out.push_str(&format!("<td>{}</td>", html_escape(&record.cell(column))));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
