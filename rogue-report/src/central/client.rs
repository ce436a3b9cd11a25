//! Central API Client
//!
//! Blocking HTTP client for the RAPIDS rogue AP endpoints. Failures are
//! returned as `AppError::Upstream` and never retried here.

use std::time::Duration;

use rogue_core::{DetectionBatch, RawDetection};
use serde_json::Value;

use crate::config::AccountConfig;
use crate::error::{AppError, AppResult};

pub const ROGUE_APS_PATH: &str = "/rapids/v1/rogue_aps";
pub const SUSPECT_APS_PATH: &str = "/rapids/v1/suspect_aps";

/// Anything that can produce a detection batch for one account
pub trait DetectionSource {
    fn fetch_detections(&self) -> AppResult<DetectionBatch>;
}

/// Central API client
pub struct CentralClient {
    agent: ureq::Agent,
    base_url: String,
    access_token: String,
    page_limit: u32,
    max_pages: u32,
}

impl CentralClient {
    pub fn new(base_url: &str, access_token: String) -> Self {
        Self {
            agent: build_agent(crate::config::DEFAULT_TIMEOUT_SECS),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            page_limit: crate::config::DEFAULT_PAGE_LIMIT,
            max_pages: crate::config::DEFAULT_MAX_PAGES,
        }
    }

    pub fn from_account(account: &AccountConfig, access_token: String) -> Self {
        Self {
            agent: build_agent(account.timeout_secs),
            base_url: account.base_url.trim_end_matches('/').to_string(),
            access_token,
            page_limit: account.page_limit,
            max_pages: account.max_pages,
        }
    }

    pub fn with_paging(mut self, page_limit: u32, max_pages: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    /// Every rogue AP
    pub fn rogue_aps(&self) -> AppResult<Vec<RawDetection>> {
        self.fetch_all(ROGUE_APS_PATH, "rogue_aps")
    }

    /// Every suspected rogue AP
    pub fn suspect_aps(&self) -> AppResult<Vec<RawDetection>> {
        self.fetch_all(SUSPECT_APS_PATH, "suspect_aps")
    }

    /// Page through `path` until `total` is reached, a page is empty or
    /// short, or `max_pages` pages have been read
    fn fetch_all(&self, path: &str, key: &str) -> AppResult<Vec<RawDetection>> {
        let mut collected: Vec<RawDetection> = Vec::new();
        let mut offset: u32 = 0;

        for page in 0..self.max_pages {
            let body = self.get_page(path, offset)?;

            let items: Vec<RawDetection> = match body.get(key) {
                Some(list) => serde_json::from_value(list.clone()).map_err(|e| {
                    AppError::Upstream(format!("{}: unexpected `{}` payload: {}", path, key, e))
                })?,
                None => {
                    return Err(AppError::Upstream(format!(
                        "{}: response has no `{}` field",
                        path, key
                    )))
                }
            };

            let count = items.len();
            let total = body.get("total").and_then(Value::as_u64);
            collected.extend(items);

            tracing::debug!(
                "{} page {}: {} item(s), {} collected, total {:?}",
                path,
                page + 1,
                count,
                collected.len(),
                total
            );

            let done = match total {
                Some(total) => count == 0 || collected.len() as u64 >= total,
                None => count < self.page_limit as usize,
            };
            if done {
                return Ok(collected);
            }

            offset += count as u32;
        }

        tracing::warn!(
            "{}: stopped after {} page(s), {} item(s) collected",
            path,
            self.max_pages,
            collected.len()
        );
        Ok(collected)
    }

    fn get_page(&self, path: &str, offset: u32) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Accept", "application/json")
            .query("limit", &self.page_limit.to_string())
            .query("offset", &offset.to_string())
            .call();

        match response {
            Ok(resp) => resp
                .into_json::<Value>()
                .map_err(|e| AppError::Upstream(format!("{}: invalid JSON: {}", path, e))),
            Err(ureq::Error::Status(401, _)) => Err(AppError::Upstream(format!(
                "{}: access token rejected (HTTP 401)",
                path
            ))),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(AppError::Upstream(format!(
                    "{}: HTTP {}: {}",
                    path,
                    code,
                    body.trim()
                )))
            }
            Err(e) => Err(AppError::Upstream(format!("{}: {}", path, e))),
        }
    }
}

impl DetectionSource for CentralClient {
    fn fetch_detections(&self) -> AppResult<DetectionBatch> {
        tracing::info!("Getting rogue APs...");
        let rogue_aps = self.rogue_aps()?;
        tracing::info!("Getting suspected rogues...");
        let suspect_aps = self.suspect_aps()?;

        Ok(DetectionBatch {
            rogue_aps,
            suspect_aps,
        })
    }
}

fn build_agent(timeout_secs: u64) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
