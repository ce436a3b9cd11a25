//! Record Module
//!
//! Detection records as received from the wireless controller and as
//! seen by the rest of the pipeline.
//!
//! ## Structure
//! - `types`: `RawDetection` (wire shape), `DetectionRecord` (normalized), `DetectionBatch`
//! - `timestamp`: parsing and cookie-style rendering of detection times
//! - `normalize`: merges rogue + suspect lists and validates every record once

pub mod types;
pub mod timestamp;
pub mod normalize;


pub use types::{DetectionBatch, DetectionRecord, RawDetection};
pub use timestamp::{parse_timestamp, to_cookie_string};
pub use normalize::{normalize, normalize_record};
