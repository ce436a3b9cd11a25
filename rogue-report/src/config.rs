//! Configuration module
//!
//! One YAML file maps account names (`default`, `lab`, ...) to their
//! settings. Loaded once at start-up and passed around read-only.
//!
//! ```yaml
//! default:
//!   base_url: https://apigw-prod2.central.arubanetworks.com
//!   customer_id: "1234"
//!   client_id: abcd
//!   token:
//!     access_token: xxxxxxxx
//!   check_ssids: [corp-wifi, corp-guest]
//!   to_emails: [noc@example.com]
//!   from_email: rogues@example.com
//!   smtp: { host: mail.example.com, port: 25 }
//!   drop_fields:
//!     slack: [encryption, last_det_device_name]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rogue_core::{Channel, DropSet, MatchRules, WatchList};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::error::{AppError, AppResult};

// ============================================================================
// DEFAULTS
// ============================================================================

/// File looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".env.yaml";

pub const DEFAULT_SUBJECT: &str = "Wireless Rogue AP Alert";
pub const DEFAULT_PAGE_LIMIT: u32 = 80;
pub const DEFAULT_MAX_PAGES: u32 = 50;
pub const DEFAULT_TOKEN_DIR: &str = "temp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SMTP_PORT: u16 = 25;

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_threshold() -> u8 {
    MatchRules::default().threshold
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_token_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TOKEN_DIR)
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

// ============================================================================
// ACCOUNT CONFIG
// ============================================================================

/// Settings for one monitored account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AccountConfig {
    /// Central API gateway
    #[validate(length(min = 1, message = "base_url must not be empty"))]
    pub base_url: String,

    #[serde(default)]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub token: Option<TokenConfig>,

    /// Watched SSID fragments
    #[serde(default)]
    pub check_ssids: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_recipients"))]
    pub to_emails: Vec<String>,

    #[serde(default)]
    #[validate(email(message = "from_email is not a valid address"))]
    pub from_email: Option<String>,

    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default)]
    pub sendgrid_api_key: Option<String>,

    /// Override for the SendGrid mail-send endpoint
    #[serde(default)]
    pub sendgrid_url: Option<String>,

    #[serde(default)]
    pub slack_bot_token: Option<String>,

    #[serde(default)]
    pub slack_channel_id: Option<String>,

    /// Override for the Slack Web API base
    #[serde(default)]
    pub slack_api_url: Option<String>,

    #[serde(default)]
    pub smtp: Option<SmtpConfig>,

    /// Per-channel drop sets; channels not listed use their defaults
    #[serde(default)]
    pub drop_fields: BTreeMap<Channel, Vec<String>>,

    #[serde(default = "default_threshold")]
    #[validate(range(max = 100, message = "match_threshold must be 0-100"))]
    pub match_threshold: u8,

    #[serde(default = "default_page_limit")]
    #[validate(range(min = 1, max = 1000, message = "page_limit must be 1-1000"))]
    pub page_limit: u32,

    #[serde(default = "default_max_pages")]
    #[validate(range(min = 1, message = "max_pages must be at least 1"))]
    pub max_pages: u32,

    /// Where cached API tokens are kept
    #[serde(default = "default_token_dir")]
    pub token_dir: PathBuf,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenConfig {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub starttls: bool,
}

fn validate_recipients(emails: &[String]) -> Result<(), ValidationError> {
    match emails.iter().find(|e| !e.validate_email()) {
        Some(bad) => {
            let mut err = ValidationError::new("email");
            err.message = Some(format!("to_emails contains an invalid address: {}", bad).into());
            Err(err)
        }
        None => Ok(()),
    }
}

impl AccountConfig {
    pub fn watchlist(&self) -> WatchList {
        WatchList::new(&self.check_ssids)
    }

    pub fn match_rules(&self) -> MatchRules {
        MatchRules::with_threshold(self.match_threshold)
    }

    /// Configured drop set for `channel`, or the channel default
    pub fn drop_set(&self, channel: Channel) -> DropSet {
        match self.drop_fields.get(&channel) {
            Some(fields) => fields.iter().cloned().collect(),
            None => channel.default_drop_set(),
        }
    }
}

// ============================================================================
// CONFIG FILE
// ============================================================================

/// Every account in the config file
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    accounts: BTreeMap<String, AccountConfig>,
}

impl Config {
    /// Load from `explicit`, or the first default location that exists
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => default_config_path(),
        };
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&raw, path)?;
        tracing::debug!(
            "Loaded {} account(s) from {}",
            config.accounts.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str, path: &Path) -> AppResult<Self> {
        let accounts: BTreeMap<String, AccountConfig> = serde_yaml::from_str(raw)?;

        for (name, account) in &accounts {
            account
                .validate()
                .map_err(|e| AppError::Validation(format!("account `{}`: {}", name, e)))?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            accounts,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn account(&self, name: &str) -> AppResult<&AccountConfig> {
        self.accounts.get(name).ok_or_else(|| {
            AppError::Config(format!(
                "account `{}` not found in {} (known: {})",
                name,
                self.path.display(),
                self.account_names().join(", ")
            ))
        })
    }

    pub fn account_names(&self) -> Vec<&str> {
        self.accounts.keys().map(String::as_str).collect()
    }
}

/// `./.env.yaml` if present, else `<config dir>/rogue-report/config.yaml`
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("rogue-report").join("config.yaml"))
        .filter(|path| path.exists())
        .unwrap_or(local)
}
