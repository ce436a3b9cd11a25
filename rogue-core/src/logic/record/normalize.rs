//! Record Normalizer
//!
//! Rogues first, then suspects, in their original order. No deduplication:
//! two identical detections both survive.

use super::timestamp::humanize;
use super::types::{DetectionRecord, RawDetection};
use crate::error::ReportResult;

/// Merge both detection lists and normalize every record.
///
/// A malformed `first_seen` / `last_seen` aborts the whole call.
pub fn normalize(
    rogues: Vec<RawDetection>,
    suspects: Vec<RawDetection>,
) -> ReportResult<Vec<DetectionRecord>> {
    let total = rogues.len() + suspects.len();
    let records = rogues
        .into_iter()
        .chain(suspects)
        .map(normalize_record)
        .collect::<ReportResult<Vec<_>>>()?;

    log::debug!("Normalized {} detections", total);
    Ok(records)
}

/// Normalize a single detection
pub fn normalize_record(raw: RawDetection) -> ReportResult<DetectionRecord> {
    let human_first_seen = raw
        .first_seen
        .as_deref()
        .map(|value| humanize("first_seen", value))
        .transpose()?;

    let human_last_seen = raw
        .last_seen
        .as_deref()
        .map(|value| humanize("last_seen", value))
        .transpose()?;

    Ok(DetectionRecord {
        id: raw.id,
        ssid: raw.ssid.unwrap_or_default(),
        classification: raw.classification,
        name: raw.name,
        signal: raw.signal,
        first_seen: raw.first_seen,
        last_seen: raw.last_seen,
        human_first_seen,
        human_last_seen,
        last_det_device_name: raw.last_det_device_name,
        extra: raw.extra,
    })
}
