use super::*;
use crate::logic::record::DetectionRecord;

fn record(id: &str, ssid: &str) -> DetectionRecord {
    DetectionRecord {
        id: Some(id.to_string()),
        ssid: ssid.to_string(),
        ..Default::default()
    }
}

fn ids(records: &[DetectionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_deref().unwrap_or("")).collect()
}

#[test]
fn test_watch_term_matches_longer_ssid() {
    let records = vec![record("AA:BB", "Corp-WiFi-Guest")];
    let watchlist = WatchList::new(["corp-wifi"]);

    let flagged = classify(&records, &watchlist);
    assert!(!flagged.is_empty());
    assert_eq!(flagged[0].ssid, "Corp-WiFi-Guest");
}

#[test]
fn test_unrelated_ssid_is_not_flagged() {
    let records = vec![record("AA:BB", "totally-unrelated")];
    let watchlist = WatchList::new(["corp-wifi"]);

    assert!(classify(&records, &watchlist).is_empty());
}

#[test]
fn test_multiple_terms_emit_duplicates_in_watchlist_order() {
    let records = vec![record("AA:BB", "corp-wifi-guest"), record("CC:DD", "lobby")];
    let watchlist = WatchList::new(["guest", "lobby", "corp-wifi"]);

    let matches = find_matches(&records, &watchlist, &MatchRules::default());
    let terms: Vec<_> = matches.iter().map(|m| (m.record.id.as_deref().unwrap(), m.term)).collect();
    assert_eq!(
        terms,
        vec![("AA:BB", "guest"), ("AA:BB", "corp-wifi"), ("CC:DD", "lobby")]
    );

    let flagged = classify(&records, &watchlist);
    assert_eq!(ids(&flagged), vec!["AA:BB", "AA:BB", "CC:DD"]);
}

#[test]
fn test_empty_watchlist_flags_nothing() {
    let records = vec![record("AA:BB", "corp-wifi")];
    assert!(classify(&records, &WatchList::default()).is_empty());
    assert!(classify(&records, &WatchList::new(["  ", ""])).is_empty());
}

#[test]
fn test_score_equal_to_threshold_is_not_a_match() {
    // ratio("abcdx", "abcde") == 80
    let records = vec![record("AA:BB", "abcdx")];
    let watchlist = WatchList::new(["abcde"]);
    assert!(classify(&records, &watchlist).is_empty());

    let looser = MatchRules::with_threshold(79);
    assert_eq!(classify_with_rules(&records, &watchlist, &looser).len(), 1);
}

#[test]
fn test_ssid_sharing_only_a_tail_is_flagged() {
    // "corp-wi" overlaps the end of the SSID; scores 88
    let records = vec![record("AA:BB", "Free-Corp-Wi")];
    let watchlist = WatchList::new(["corp-wifi"]);

    let matches = find_matches(&records, &watchlist, &MatchRules::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score, 88);
    assert_eq!(ids(&classify(&records, &watchlist)), vec!["AA:BB"]);
}

#[test]
fn test_case_is_ignored() {
    let records = vec![record("AA:BB", "EVILTWIN")];
    let watchlist = WatchList::new(["EvilTwin"]);
    assert_eq!(classify(&records, &watchlist).len(), 1);
}

#[test]
fn test_empty_ssid_never_matches() {
    let records = vec![record("AA:BB", "")];
    let watchlist = WatchList::new(["corp"]);
    assert!(classify(&records, &watchlist).is_empty());
}

#[test]
fn test_input_is_untouched() {
    let records = vec![record("AA:BB", "corp-wifi")];
    let before = records.clone();
    let _ = classify(&records, &WatchList::new(["corp-wifi", "corp"]));
    assert_eq!(records, before);
}

#[test]
fn test_watchlist_is_lowercased_and_trimmed() {
    let watchlist = WatchList::new([" Corp-WiFi ", "", "GUEST"]);
    assert_eq!(watchlist.iter().collect::<Vec<_>>(), vec!["corp-wifi", "guest"]);
}
