//! Report Projector
//!
//! Known fields come out in canonical column order, then any vendor field
//! nobody dropped, under its own name, sorted by name. Absent fields are
//! left out rather than rendered as blanks. Raw `first_seen` / `last_seen`
//! are superseded by their `human_*` forms and never projected.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::fields::{column_name, DropSet};
use crate::logic::record::DetectionRecord;

/// Presentation-ready row: ordered (column, value) pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedRecord {
    fields: Vec<(String, Value)>,
}

impl ProjectedRecord {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Cell text for a column; missing columns render empty
    pub fn cell(&self, column: &str) -> String {
        self.get(column).map(value_to_str).unwrap_or_default()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ProjectedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Project every record with the same drop set
pub fn project(records: &[DetectionRecord], drop: &DropSet) -> Vec<ProjectedRecord> {
    records.iter().map(|r| project_record(r, drop)).collect()
}

/// Drop, then rename, one record
pub fn project_record(record: &DetectionRecord, drop: &DropSet) -> ProjectedRecord {
    let fields = record_fields(record)
        .into_iter()
        .filter(|(field, _)| !drop.contains(field))
        .map(|(field, value)| {
            let name = column_name(&field).map(str::to_string).unwrap_or(field);
            (name, value)
        })
        .collect();

    ProjectedRecord { fields }
}

/// Present fields of a record, canonical ones first
fn record_fields(record: &DetectionRecord) -> Vec<(String, Value)> {
    let mut fields = Vec::with_capacity(8 + record.extra.len());

    push_text(&mut fields, "classification", record.classification.as_ref());
    push_text(&mut fields, "ssid", Some(&record.ssid));
    push_text(&mut fields, "id", record.id.as_ref());
    push_text(&mut fields, "name", record.name.as_ref());

    if let Some(signal) = &record.signal {
        fields.push(("signal".to_string(), Value::Number(signal.clone())));
    }

    push_text(&mut fields, "human_last_seen", record.human_last_seen.as_ref());
    push_text(&mut fields, "last_det_device_name", record.last_det_device_name.as_ref());
    push_text(&mut fields, "human_first_seen", record.human_first_seen.as_ref());

    if record.id.is_none() {
        log::debug!("Detection without id, BSSID left out (ssid {:?})", record.ssid);
    }

    for (name, value) in &record.extra {
        fields.push((name.clone(), value.clone()));
    }

    fields
}

fn push_text(fields: &mut Vec<(String, Value)>, name: &str, value: Option<&String>) {
    if let Some(text) = value {
        fields.push((name.to_string(), Value::String(text.clone())));
    }
}

pub(crate) fn value_to_str(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
