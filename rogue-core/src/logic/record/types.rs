//! Detection record types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// WIRE SHAPE
// ============================================================================

/// One access point event exactly as the controller reports it.
///
/// Every field is optional on the wire. Vendor fields the pipeline does
/// not interpret (`acknowledged`, `encryption`, `mac_vendor`, ...) are kept
/// in `extra` so a report can still show or drop them by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Hardware address, shown as BSSID
    pub id: Option<String>,
    pub ssid: Option<String>,
    pub classification: Option<String>,
    /// Detected manufacturer
    pub name: Option<String>,
    pub signal: Option<Number>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    /// Sensor that last heard this AP
    pub last_det_device_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Both detection lists returned by one fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionBatch {
    #[serde(default)]
    pub rogue_aps: Vec<RawDetection>,
    #[serde(default)]
    pub suspect_aps: Vec<RawDetection>,
}

impl DetectionBatch {
    pub fn len(&self) -> usize {
        self.rogue_aps.len() + self.suspect_aps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// NORMALIZED SHAPE
// ============================================================================

/// A detection after normalization.
///
/// `ssid` is always present (possibly empty) and each raw timestamp that
/// was present has a parsed, human-readable counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ssid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_first_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_last_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_det_device_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
