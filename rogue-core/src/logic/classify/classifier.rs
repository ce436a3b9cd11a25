//! Rogue Classifier
//!
//! Input: normalized records + watch-list. Output: the records whose SSID
//! resembles a watched term. Pure; the input slice is never touched.
//!
//! A record is emitted once per matching term, in watch-list order, so a
//! record hitting two terms appears twice.

use super::fuzzy::partial_ratio;
use super::rules::MatchRules;
use super::watchlist::WatchList;
use crate::logic::record::DetectionRecord;

// ============================================================================
// MATCHES
// ============================================================================

/// One (record, term) hit
#[derive(Debug, Clone, PartialEq)]
pub struct SsidMatch<'a> {
    pub record: &'a DetectionRecord,
    pub term: &'a str,
    pub score: u8,
}

/// Every (record, term) pair scoring above the threshold, in output order
pub fn find_matches<'a>(
    records: &'a [DetectionRecord],
    watchlist: &'a WatchList,
    rules: &MatchRules,
) -> Vec<SsidMatch<'a>> {
    if watchlist.is_empty() {
        log::debug!("Empty watch-list, nothing to classify");
        return Vec::new();
    }

    let mut matches = Vec::new();

    for record in records {
        let ssid = record.ssid.to_lowercase();

        for term in watchlist.iter() {
            let score = partial_ratio(&ssid, term);
            if rules.is_match(score) {
                log::debug!(
                    "SSID {:?} matched watch term {:?} (score {})",
                    record.ssid,
                    term,
                    score
                );
                matches.push(SsidMatch { record, term, score });
            }
        }
    }

    matches
}

// ============================================================================
// CLASSIFY
// ============================================================================

/// Records classified as rogue under the default threshold
pub fn classify(records: &[DetectionRecord], watchlist: &WatchList) -> Vec<DetectionRecord> {
    classify_with_rules(records, watchlist, &MatchRules::default())
}

/// Records classified as rogue under custom rules
pub fn classify_with_rules(
    records: &[DetectionRecord],
    watchlist: &WatchList,
    rules: &MatchRules,
) -> Vec<DetectionRecord> {
    find_matches(records, watchlist, rules)
        .into_iter()
        .map(|m| m.record.clone())
        .collect()
}
