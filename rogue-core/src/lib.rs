//! Rogue AP Report - Core Pipeline
//!
//! Turns raw rogue / suspected-rogue detections into report-ready rows.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌────────────┐   ┌────────────┐   ┌───────────┐   ┌──────────┐
//! │ DetectionBatch│──▶│ normalize  │──▶│  classify  │──▶│  project  │──▶│  render  │
//! │ rogue+suspect │   │ ssid, time │   │ watch-list │   │ drop/rename│  │ table/html│
//! └──────────────┘   └────────────┘   └────────────┘   └───────────┘   └──────────┘
//! ```
//!
//! The fetch and delivery ends live in the `rogue-report` binary.

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{ReportError, ReportResult};

pub use logic::record::{normalize, normalize_record, DetectionBatch, DetectionRecord, RawDetection};
pub use logic::classify::{
    classify, classify_with_rules, find_matches, partial_ratio, MatchRules, SsidMatch, WatchList,
};
pub use logic::projection::{project, project_record, Channel, DropSet, ProjectedRecord};
pub use logic::render::{render, render_records, ReportFormat, ReportSection};
pub use logic::pipeline::{run, Findings};
