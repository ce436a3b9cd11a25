//! Classify Module
//!
//! Decides which detections impersonate a watched SSID.
//!
//! ## Structure
//! - `fuzzy`: partial-ratio string similarity (0-100)
//! - `rules`: match threshold
//! - `watchlist`: lower-cased watch terms per account
//! - `classifier`: the matching loop
//!
//! ## Usage
//! ```ignore
//! use rogue_core::logic::classify::{classify, WatchList};
//!
//! let watchlist = WatchList::new(["Corp-WiFi"]);
//! let flagged = classify(&records, &watchlist);
//! ```

pub mod fuzzy;
pub mod rules;
pub mod watchlist;
pub mod classifier;

#[cfg(test)]
mod tests;

pub use fuzzy::{partial_ratio, ratio};
pub use rules::MatchRules;
pub use watchlist::WatchList;
pub use classifier::{classify, classify_with_rules, find_matches, SsidMatch};
