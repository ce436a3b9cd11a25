use super::*;
use crate::logic::projection::{project_record, DropSet};
use crate::logic::record::{normalize_record, RawDetection};
use serde_json::json;

fn row(value: serde_json::Value) -> ProjectedRecord {
    let raw: RawDetection = serde_json::from_value(value).unwrap();
    project_record(&normalize_record(raw).unwrap(), &DropSet::empty())
}

fn sample_rows() -> Vec<ProjectedRecord> {
    vec![
        row(json!({"id": "AA:BB", "ssid": "EvilTwin", "classification": "rogue", "signal": -70})),
        row(json!({"id": "CC:DD", "ssid": "<script>", "classification": "suspected", "name": "Beta & Co"})),
    ]
}

#[test]
fn test_columns_are_unioned_in_first_appearance_order() {
    let cols = columns(&sample_rows());
    assert_eq!(cols, vec!["Type", "Rogue SSID", "BSSID", "Signal", "Manufacture"]);
}

#[test]
fn test_plain_table_contains_headers_and_cells() {
    let out = render_records(&sample_rows(), ReportFormat::Plain).unwrap();
    assert!(out.contains("Rogue SSID"));
    assert!(out.contains("EvilTwin"));
    assert!(out.contains("-70"));
    assert!(out.contains("Beta & Co"));
}

#[test]
fn test_html_escapes_cells() {
    let out = render_records(&sample_rows(), ReportFormat::Html).unwrap();
    assert!(out.contains("<th>Rogue SSID</th>"));
    assert!(out.contains("<td>&lt;script&gt;</td>"));
    assert!(out.contains("Beta &amp; Co"));
    assert!(!out.contains("<script>"));
}

#[test]
fn test_html_document_has_every_section() {
    let sections = vec![
        ReportSection::new("1 SSIDs Classified as Rogues", sample_rows()[..1].to_vec()),
        ReportSection::new("0 Rogue Types Found", vec![]),
    ];
    let out = render(&sections, ReportFormat::Html).unwrap();
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<h2>1 SSIDs Classified as Rogues</h2>"));
    assert!(out.contains("<h2>0 Rogue Types Found</h2>"));
    assert!(out.contains("No rogue access points found."));
}

#[test]
fn test_csv_output() {
    let out = render_records(&sample_rows(), ReportFormat::Csv).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Type,Rogue SSID,BSSID,Signal,Manufacture"));
    assert_eq!(lines.next(), Some("rogue,EvilTwin,AA:BB,-70,"));
    assert_eq!(lines.next(), Some("suspected,<script>,CC:DD,,Beta & Co"));
}

#[test]
fn test_console_sections_have_titles() {
    let sections = vec![ReportSection::new("2 Rogue Types Found", sample_rows())];
    let out = render(&sections, ReportFormat::Console).unwrap();
    assert!(out.contains("2 Rogue Types Found"));
    assert!(out.contains("CC:DD"));
}

#[test]
fn test_format_parsing() {
    assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
    assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Plain);
    assert!("pdf".parse::<ReportFormat>().is_err());
}
