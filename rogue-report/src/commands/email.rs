//! `email` / `sendgrid`: HTML report through SendGrid

use rogue_core::Findings;

use super::{dispatch, Scope};
use crate::config::AccountConfig;
use crate::delivery::{ConsoleSink, SendgridSink, Sink};
use crate::error::AppResult;

pub fn run(findings: &Findings, account: &AccountConfig, show: bool) -> AppResult<()> {
    let sendgrid = SendgridSink::from_account(account)?;
    println!(
        "Emailing a report of {} rogue APs to {:?}",
        findings.all.len(),
        sendgrid.recipients()
    );

    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
    if show {
        sinks.push(Box::new(ConsoleSink::new()));
    }
    sinks.push(Box::new(sendgrid));

    dispatch(findings, account, Scope::ClassifiedAndAll, &sinks)
}
