//! `smtp`: all-types table through an SMTP relay

use rogue_core::Findings;

use super::{dispatch, Scope};
use crate::config::AccountConfig;
use crate::delivery::{ConsoleSink, Sink, SmtpSink};
use crate::error::AppResult;

pub fn run(findings: &Findings, account: &AccountConfig, plain: bool, show: bool) -> AppResult<()> {
    let smtp = SmtpSink::from_account(account, plain)?;

    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
    if show {
        sinks.push(Box::new(ConsoleSink::new()));
    }
    sinks.push(Box::new(smtp));

    println!("Sending message via SMTP...");
    dispatch(findings, account, Scope::AllOnly, &sinks)
}
