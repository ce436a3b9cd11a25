//! Subcommands
//!
//! Every report command runs the same pipeline: fetch detections for the
//! account, normalize and classify them, then hand per-channel sections to
//! its sinks.
//!
//! ## Structure
//! - `show`: console tables, optional HTML file
//! - `email`: SendGrid
//! - `slack`: Slack file upload
//! - `smtp`: SMTP relay
//! - `tokens`: token cache listing

pub mod email;
pub mod show;
pub mod slack;
pub mod smtp;
pub mod tokens;

use rogue_core::{Channel, Findings, ReportSection};

use crate::central::DetectionSource;
use crate::config::AccountConfig;
use crate::delivery::{deliver_all, Sink};
use crate::error::AppResult;

/// Which sections a command sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Classified section, then the all-types section
    ClassifiedAndAll,
    /// All-types section, then the classified section
    AllThenClassified,
    /// All-types section only
    AllOnly,
}

/// Fetch, normalize and classify one account's detections
pub fn collect_findings(source: &dyn DetectionSource, account: &AccountConfig) -> AppResult<Findings> {
    let batch = source.fetch_detections()?;
    tracing::debug!("Fetched {} detection(s)", batch.len());

    let findings = rogue_core::run(batch, &account.watchlist(), &account.match_rules())?;
    Ok(findings)
}

/// Sections for `channel`, projected with that channel's drop set
pub fn sections_for(
    findings: &Findings,
    account: &AccountConfig,
    scope: Scope,
    channel: Channel,
) -> Vec<ReportSection> {
    let drop = account.drop_set(channel);
    match scope {
        Scope::ClassifiedAndAll => vec![
            findings.classified_section(&drop),
            findings.all_types_section(&drop),
        ],
        Scope::AllThenClassified => vec![
            findings.all_types_section(&drop),
            findings.classified_section(&drop),
        ],
        Scope::AllOnly => vec![findings.all_types_section(&drop)],
    }
}

/// Deliver to every sink; fails with the first delivery error once all
/// sinks have been attempted
pub fn dispatch(
    findings: &Findings,
    account: &AccountConfig,
    scope: Scope,
    sinks: &[Box<dyn Sink>],
) -> AppResult<()> {
    let results = deliver_all(sinks, |channel| sections_for(findings, account, scope, channel));

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!("{} of {} delivery attempt(s) failed", failed, results.len());
    }

    match results.into_iter().find_map(Result::err) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
