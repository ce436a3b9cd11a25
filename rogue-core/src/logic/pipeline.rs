//! Pipeline entry point
//!
//! `classify(normalize(fetch(account)), watchlist(account))`, then
//! projection per delivery channel.

use crate::constants::{all_types_title, classified_title};
use crate::error::ReportResult;
use crate::logic::classify::{classify_with_rules, MatchRules, WatchList};
use crate::logic::projection::{project, DropSet};
use crate::logic::record::{normalize, DetectionBatch, DetectionRecord};
use crate::logic::render::ReportSection;

/// Result of one run: every detection, and the ones the watch-list flagged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub all: Vec<DetectionRecord>,
    pub classified: Vec<DetectionRecord>,
}

impl Findings {
    /// "N SSIDs Classified as Rogues"
    pub fn classified_section(&self, drop: &DropSet) -> ReportSection {
        ReportSection::new(
            classified_title(self.classified.len()),
            project(&self.classified, drop),
        )
    }

    /// "N Rogue Types Found"
    pub fn all_types_section(&self, drop: &DropSet) -> ReportSection {
        ReportSection::new(all_types_title(self.all.len()), project(&self.all, drop))
    }
}

/// Normalize a fetched batch and classify it against the watch-list
pub fn run(batch: DetectionBatch, watchlist: &WatchList, rules: &MatchRules) -> ReportResult<Findings> {
    let all = normalize(batch.rogue_aps, batch.suspect_aps)?;
    let classified = classify_with_rules(&all, watchlist, rules);

    log::info!(
        "{} detections, {} flagged by {} watch terms",
        all.len(),
        classified.len(),
        watchlist.len()
    );

    Ok(Findings { all, classified })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::record::RawDetection;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawDetection {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_end_to_end_eviltwin() {
        let batch = DetectionBatch {
            rogue_aps: vec![raw(json!({
                "id": "AA:BB",
                "ssid": "EvilTwin",
                "classification": "rogue",
                "name": "Acme",
                "signal": -70,
                "last_seen": "2024-06-01T00:00:00Z",
                "last_det_device_name": "AP-12"
            }))],
            suspect_aps: vec![raw(json!({
                "id": "CC:DD",
                "ssid": "Unrelated",
                "classification": "suspected",
                "name": "Beta",
                "signal": -80,
                "last_seen": "2024-06-01T01:00:00Z",
                "last_det_device_name": "AP-7"
            }))],
        };

        let findings = run(batch, &WatchList::new(["eviltwin"]), &MatchRules::default()).unwrap();
        assert_eq!(findings.all.len(), 2);
        assert_eq!(findings.classified.len(), 1);
        assert_eq!(findings.classified[0].id.as_deref(), Some("AA:BB"));

        let section = findings.classified_section(&DropSet::empty());
        assert_eq!(section.title, "1 SSIDs Classified as Rogues");
        assert_eq!(
            serde_json::to_value(&section.records[0]).unwrap(),
            json!({
                "Type": "rogue",
                "Rogue SSID": "EvilTwin",
                "BSSID": "AA:BB",
                "Manufacture": "Acme",
                "Signal": -70,
                "Last Seen": "Sat, 01-Jun-2024 00:00:00 GMT",
                "Seen By": "AP-12"
            })
        );
        assert_eq!(section.records[0].len(), 7);

        let all = findings.all_types_section(&DropSet::empty());
        assert_eq!(all.title, "2 Rogue Types Found");
    }

    #[test]
    fn test_malformed_timestamp_aborts_run() {
        let batch = DetectionBatch {
            rogue_aps: vec![raw(json!({"id": "AA:BB", "last_seen": "not a time"}))],
            suspect_aps: vec![],
        };
        assert!(run(batch, &WatchList::new(["x"]), &MatchRules::default()).is_err());
    }
}
