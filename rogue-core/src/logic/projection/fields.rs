//! Field names, column names and per-channel drop sets

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// RENAME MAP
// ============================================================================

/// Record field -> report column, in canonical column order
pub const FIELD_RENAMES: &[(&str, &str)] = &[
    ("classification", "Type"),
    ("ssid", "Rogue SSID"),
    ("id", "BSSID"),
    ("name", "Manufacture"),
    ("signal", "Signal"),
    ("human_last_seen", "Last Seen"),
    ("last_det_device_name", "Seen By"),
];

/// Column header for a record field, if it has one
pub fn column_name(field: &str) -> Option<&'static str> {
    FIELD_RENAMES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, column)| *column)
}

/// Vendor bookkeeping nobody reads in a report
pub const VENDOR_NOISE_FIELDS: &[&str] = &[
    "acknowledged",
    "classification_method",
    "encryption",
    "mac_vendor",
    "first_det_device_name",
    "containment_status",
    "cust_id",
    "first_seen",
    "first_det_device",
    "last_det_device",
    "human_first_seen",
    "overriden",
];

// ============================================================================
// DROP SET
// ============================================================================

/// Record field names removed before renaming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropSet(BTreeSet<String>);

impl DropSet {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.0.insert(field.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DropSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// CHANNELS
// ============================================================================

/// Where a report goes. Each channel has its own default drop set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Console,
    Smtp,
    Sendgrid,
    Slack,
    File,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Console,
        Channel::Smtp,
        Channel::Sendgrid,
        Channel::Slack,
        Channel::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Console => "console",
            Channel::Smtp => "smtp",
            Channel::Sendgrid => "sendgrid",
            Channel::Slack => "slack",
            Channel::File => "file",
        }
    }

    /// Drop set used when the account config does not override it.
    /// Slack also loses the sensor name; every other channel keeps it.
    pub fn default_drop_set(&self) -> DropSet {
        let mut drop = DropSet::new(VENDOR_NOISE_FIELDS.iter().copied());
        if *self == Channel::Slack {
            drop.insert("last_det_device_name");
        }
        drop
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown delivery channel: {}", s))
    }
}
