//! Shared constants for the report pipeline.

/// Partial-ratio score a watch-list term must strictly exceed
pub const DEFAULT_MATCH_THRESHOLD: u8 = 80;

/// Cookie-style rendering used for `human_first_seen` / `human_last_seen`.
/// Instants are always converted to UTC first.
pub const COOKIE_FORMAT: &str = "%a, %d-%b-%Y %H:%M:%S GMT";

/// Title of the watch-list section
pub fn classified_title(count: usize) -> String {
    format!("{} SSIDs Classified as Rogues", count)
}

/// Title of the section listing every detection
pub fn all_types_title(count: usize) -> String {
    format!("{} Rogue Types Found", count)
}

/// Shown in place of an empty table
pub const EMPTY_SECTION_TEXT: &str = "No rogue access points found.";
