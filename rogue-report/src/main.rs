//! Rogue AP Report
//!
//! Pulls rogue and suspected-rogue detections from the Central API,
//! flags SSIDs that look like the account's own networks, and ships the
//! tables to the console, e-mail, or Slack.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────────────────────┐   ┌──────────────┐
//! │  Central   │──▶│          rogue-core          │──▶│    Sinks     │
//! │  (ureq)    │   │ normalize → classify → render│   │ console/file │
//! └────────────┘   └──────────────────────────────┘   │ smtp/sendgrid│
//!                                                     │ slack        │
//!                                                     └──────────────┘
//! ```

mod central;
mod commands;
mod config;
mod delivery;
mod error;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::central::{resolve_access_token, CentralClient};
use crate::commands::show::{ShowOptions, DEFAULT_OUTPUT};
use crate::config::{AccountConfig, Config};

use crate::error::AppResult;

#[derive(Debug, Parser)]
#[command(name = "rogue-report", version, about = "Report rogue Wi-Fi access points")]
struct Cli {
    /// Config file (default: ./.env.yaml)
    #[arg(long, global = true, env = "ROGUE_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Central API access token, overrides the config file
    #[arg(long, global = true, env = "CENTRAL_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show table of rogue APs
    Show {
        #[arg(default_value = "default")]
        account: String,

        /// Classified table first (default)
        #[arg(long, overrides_with = "no_rev")]
        rev: bool,

        /// All-types table first
        #[arg(long = "no-rev", overrides_with = "rev")]
        no_rev: bool,

        /// Also save an HTML report
        #[arg(long)]
        save: bool,

        /// Where `--save` writes
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Email report of rogue APs through SendGrid
    #[command(alias = "sendgrid")]
    Email {
        #[arg(default_value = "default")]
        account: String,

        /// Also print the tables
        #[arg(long)]
        show: bool,
    },

    /// Send table of rogue APs to Slack
    Slack {
        #[arg(default_value = "default")]
        account: String,

        #[arg(long)]
        show: bool,
    },

    /// Email table of rogue APs through an SMTP relay
    Smtp {
        #[arg(default_value = "default")]
        account: String,

        /// ASCII table instead of HTML
        #[arg(long)]
        plain: bool,

        #[arg(long)]
        show: bool,
    },

    /// Show the token cache
    Tokens {
        #[arg(default_value = "default")]
        account: String,
    },
}

impl Command {
    fn account(&self) -> &str {
        match self {
            Command::Show { account, .. }
            | Command::Email { account, .. }
            | Command::Slack { account, .. }
            | Command::Smtp { account, .. }
            | Command::Tokens { account } => account,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "rogue_report=warn,rogue_core=warn",
        1 => "rogue_report=info,rogue_core=info",
        2 => "rogue_report=debug,rogue_core=debug",
        _ => "rogue_report=trace,rogue_core=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fetch_findings(account: &AccountConfig, cli_token: Option<&str>) -> AppResult<rogue_core::Findings> {
    let token = resolve_access_token(account, cli_token)?;
    let client = CentralClient::from_account(account, token);
    commands::collect_findings(&client, account)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let name = cli.command.account();
    let account = config
        .account(name)
        .with_context(|| format!("selecting account `{}`", name))?;
    let token = cli.access_token.as_deref();

    match &cli.command {
        Command::Show { no_rev, save, output, .. } => {
            let findings = fetch_findings(account, token)?;
            let options = ShowOptions {
                rev: !*no_rev,
                save: save.then(|| output.clone()),
            };
            commands::show::run(&findings, account, &options)?;
        }
        Command::Email { show, .. } => {
            let findings = fetch_findings(account, token)?;
            commands::email::run(&findings, account, *show).context("sending report via SendGrid")?;
        }
        Command::Slack { show, .. } => {
            let findings = fetch_findings(account, token)?;
            commands::slack::run(&findings, account, *show).context("sending report to Slack")?;
        }
        Command::Smtp { plain, show, .. } => {
            let findings = fetch_findings(account, token)?;
            commands::smtp::run(&findings, account, *plain, *show).context("sending report via SMTP")?;
        }
        Command::Tokens { .. } => commands::tokens::run(account)?,
    }

    Ok(())
}
