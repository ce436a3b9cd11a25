//! `slack`: upload the all-types table

use rogue_core::Findings;

use super::{dispatch, Scope};
use crate::config::AccountConfig;
use crate::delivery::{ConsoleSink, SlackSink, Sink};
use crate::error::AppResult;

pub fn run(findings: &Findings, account: &AccountConfig, show: bool) -> AppResult<()> {
    let slack = SlackSink::from_account(account)?;

    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
    if show {
        sinks.push(Box::new(ConsoleSink::new()));
    }
    sinks.push(Box::new(slack));

    println!("Sending message to Slack...");
    dispatch(findings, account, Scope::AllOnly, &sinks)?;
    println!("Table uploaded successfully!");
    Ok(())
}
