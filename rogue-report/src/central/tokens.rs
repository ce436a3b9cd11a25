//! Access tokens
//!
//! Resolution order: `--access-token` / `CENTRAL_ACCESS_TOKEN`, then the
//! account's `token.access_token`, then the cached token file
//! `tok_<customer_id>_<client_id>.json` in the token directory.
//! Obtaining or refreshing tokens is left to whatever fills that cache.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::AccountConfig;
use crate::error::{AppError, AppResult};

/// A file in the token directory
#[derive(Debug, Clone, PartialEq)]
pub struct TokenFile {
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// The on-disk token cache
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(customer_id: &str, client_id: &str) -> String {
        format!("tok_{}_{}.json", customer_id, client_id)
    }

    /// Regular files in the directory, sorted by path
    pub fn list(&self) -> AppResult<Vec<TokenFile>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            files.push(TokenFile {
                path: entry.path(),
                size: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    /// Cached access token for a customer/client pair, if one exists
    pub fn load_access_token(&self, customer_id: &str, client_id: &str) -> AppResult<Option<String>> {
        let path = self.dir.join(Self::file_name(customer_id, client_id));
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let cached: Value = serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("token cache {} is not JSON: {}", path.display(), e))
        })?;

        Ok(cached
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string))
    }
}

/// Pick the access token for an account
pub fn resolve_access_token(account: &AccountConfig, cli_token: Option<&str>) -> AppResult<String> {
    if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    if let Some(token) = account
        .token
        .as_ref()
        .and_then(|t| t.access_token.as_deref())
        .filter(|t| !t.is_empty())
    {
        return Ok(token.to_string());
    }

    if let (Some(customer), Some(client)) = (&account.customer_id, &account.client_id) {
        let store = TokenStore::new(&account.token_dir);
        if let Some(token) = store.load_access_token(customer, client)? {
            tracing::debug!("Using cached token from {}", store.dir().display());
            return Ok(token);
        }
    }

    Err(AppError::Config(
        "no access token: set token.access_token, CENTRAL_ACCESS_TOKEN, or populate the token cache"
            .to_string(),
    ))
}
