//! `show`: print the tables, optionally save an HTML copy

use std::path::PathBuf;

use rogue_core::Findings;

use super::{dispatch, Scope};
use crate::config::AccountConfig;
use crate::delivery::{ConsoleSink, FileSink, Sink};
use crate::error::AppResult;

pub const DEFAULT_OUTPUT: &str = "rogues_found.html";

#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Classified table first; when false the all-types table comes first
    pub rev: bool,
    /// Also write an HTML report here
    pub save: Option<PathBuf>,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            rev: true,
            save: None,
        }
    }
}

impl ShowOptions {
    pub fn scope(&self) -> Scope {
        if self.rev {
            Scope::ClassifiedAndAll
        } else {
            Scope::AllThenClassified
        }
    }

    pub fn sinks(&self) -> Vec<Box<dyn Sink>> {
        let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(ConsoleSink::new())];
        if let Some(path) = &self.save {
            sinks.push(Box::new(FileSink::html(path)));
        }
        sinks
    }
}

pub fn run(findings: &Findings, account: &AccountConfig, options: &ShowOptions) -> AppResult<()> {
    dispatch(findings, account, options.scope(), &options.sinks())?;

    if let Some(path) = &options.save {
        println!("Report saved to {}", path.display());
    }
    Ok(())
}
