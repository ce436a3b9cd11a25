//! Slack sink
//!
//! Uploads the plain-text table as a file through the external upload flow:
//! `files.getUploadURLExternal`, a raw POST of the bytes, then
//! `files.completeUploadExternal` to share it in the channel.

use std::time::Duration;

use rogue_core::{render, Channel, ReportFormat, ReportSection};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{DeliveryError, Sink};
use crate::config::AccountConfig;
use crate::error::{AppError, AppResult};

pub const SLACK_API_URL: &str = "https://slack.com/api";
pub const SLACK_FILENAME: &str = "rogue_data.txt";
pub const SLACK_COMMENT: &str = "Rogue SSIDs:";

#[derive(Debug, Deserialize)]
struct UploadTicket {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    upload_url: Option<String>,
    #[serde(default)]
    file_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SlackSink {
    api_url: String,
    bot_token: String,
    channel_id: String,
    timeout: Duration,
}

impl SlackSink {
    pub fn from_account(account: &AccountConfig) -> AppResult<Self> {
        let bot_token = account
            .slack_bot_token
            .clone()
            .ok_or_else(|| AppError::Config("`slack_bot_token` is not set".to_string()))?;
        let channel_id = account
            .slack_channel_id
            .clone()
            .ok_or_else(|| AppError::Config("`slack_channel_id` is not set".to_string()))?;

        Ok(Self {
            api_url: account
                .slack_api_url
                .as_deref()
                .unwrap_or(SLACK_API_URL)
                .trim_end_matches('/')
                .to_string(),
            bot_token,
            channel_id,
            timeout: Duration::from_secs(account.timeout_secs),
        })
    }

    fn fail(&self, message: impl Into<String>) -> DeliveryError {
        DeliveryError::new(Channel::Slack, message)
    }

    fn auth(&self) -> String {
        format!("Bearer {}", self.bot_token)
    }

    fn call_error(&self, method: &str, err: ureq::Error) -> DeliveryError {
        match err {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                self.fail(format!("{}: HTTP {}: {}", method, code, body.trim()))
            }
            other => self.fail(format!("{}: {}", method, other)),
        }
    }

    /// Step 1: reserve an upload URL
    fn get_upload_url(&self, length: usize) -> Result<(String, String), DeliveryError> {
        let method = "files.getUploadURLExternal";
        let length = length.to_string();
        let ticket: UploadTicket = ureq::post(&format!("{}/{}", self.api_url, method))
            .timeout(self.timeout)
            .set("Authorization", &self.auth())
            .send_form(&[("filename", SLACK_FILENAME), ("length", length.as_str())])
            .map_err(|e| self.call_error(method, e))?
            .into_json()
            .map_err(|e| self.fail(format!("{}: invalid JSON: {}", method, e)))?;

        if !ticket.ok {
            return Err(self.fail(format!(
                "{}: {}",
                method,
                ticket.error.unwrap_or_else(|| "unknown error".to_string())
            )));
        }

        match (ticket.upload_url, ticket.file_id) {
            (Some(url), Some(id)) => Ok((url, id)),
            _ => Err(self.fail(format!("{}: response missing upload_url or file_id", method))),
        }
    }

    /// Step 2: push the bytes
    fn upload(&self, upload_url: &str, content: &[u8]) -> Result<(), DeliveryError> {
        ureq::post(upload_url)
            .timeout(self.timeout)
            .send_bytes(content)
            .map_err(|e| self.call_error("upload", e))?;
        Ok(())
    }

    /// Step 3: share the file in the channel
    fn complete(&self, file_id: &str) -> Result<(), DeliveryError> {
        let method = "files.completeUploadExternal";
        let body: Value = ureq::post(&format!("{}/{}", self.api_url, method))
            .timeout(self.timeout)
            .set("Authorization", &self.auth())
            .send_json(json!({
                "files": [{ "id": file_id, "title": SLACK_FILENAME }],
                "channel_id": self.channel_id,
                "initial_comment": SLACK_COMMENT,
            }))
            .map_err(|e| self.call_error(method, e))?
            .into_json()
            .map_err(|e| self.fail(format!("{}: invalid JSON: {}", method, e)))?;

        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(self.fail(format!("{}: {}", method, reason)));
        }
        Ok(())
    }
}

impl Sink for SlackSink {
    fn channel(&self) -> Channel {
        Channel::Slack
    }

    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError> {
        let text = render(sections, ReportFormat::Plain).map_err(|e| self.fail(e.to_string()))?;
        if text.trim().is_empty() {
            return Err(self.fail("nothing to upload: report has no sections"));
        }
        let content = text.into_bytes();

        let (upload_url, file_id) = self.get_upload_url(content.len())?;
        self.upload(&upload_url, &content)?;
        self.complete(&file_id)?;

        Ok(format!("uploaded {} to {}", SLACK_FILENAME, self.channel_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::spawn_server;
    use axum::{
        body::Bytes,
        extract::State,
        routing::post,
        Form, Json, Router,
    };
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Seen {
        form: HashMap<String, String>,
        uploaded: Vec<u8>,
        complete: Option<Value>,
    }

    #[derive(Clone)]
    struct FakeSlack {
        base: String,
        seen: Arc<Mutex<Seen>>,
        complete_ok: bool,
    }

    async fn get_upload_url(
        State(fake): State<FakeSlack>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Json<Value> {
        fake.seen.lock().unwrap().form = form;
        Json(json!({
            "ok": true,
            "upload_url": format!("{}/upload/F123", fake.base),
            "file_id": "F123"
        }))
    }

    async fn upload(State(fake): State<FakeSlack>, body: Bytes) -> &'static str {
        fake.seen.lock().unwrap().uploaded = body.to_vec();
        "OK - 1"
    }

    async fn complete(State(fake): State<FakeSlack>, Json(body): Json<Value>) -> Json<Value> {
        fake.seen.lock().unwrap().complete = Some(body);
        if fake.complete_ok {
            Json(json!({ "ok": true, "files": [{ "id": "F123" }] }))
        } else {
            Json(json!({ "ok": false, "error": "not_in_channel" }))
        }
    }

    fn fake_slack(complete_ok: bool) -> (String, Arc<Mutex<Seen>>) {
        let seen: Arc<Mutex<Seen>> = Arc::default();
        let shared = seen.clone();
        let base = spawn_server(move |base| {
            Router::new()
                .route("/files.getUploadURLExternal", post(get_upload_url))
                .route("/upload/F123", post(upload))
                .route("/files.completeUploadExternal", post(complete))
                .with_state(FakeSlack {
                    base,
                    seen: shared,
                    complete_ok,
                })
        });
        (base, seen)
    }

    fn sink(api_url: &str) -> SlackSink {
        let raw = format!(
            "default:\n  base_url: https://x\n  slack_bot_token: xoxb-test\n  slack_channel_id: C42\n  slack_api_url: {}\n",
            api_url
        );
        let config = Config::from_yaml_str(&raw, Path::new("test.yaml")).unwrap();
        SlackSink::from_account(config.account("default").unwrap()).unwrap()
    }

    #[test]
    fn test_three_step_upload() {
        let (base, seen) = fake_slack(true);
        let sections = vec![ReportSection::new("0 Rogue Types Found", vec![])];

        let receipt = sink(&base).deliver(&sections).unwrap();
        assert!(receipt.contains("C42"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.form["filename"], SLACK_FILENAME);
        assert_eq!(seen.form["length"], seen.uploaded.len().to_string());

        let uploaded = String::from_utf8(seen.uploaded.clone()).unwrap();
        assert!(uploaded.contains("0 Rogue Types Found"));

        let complete = seen.complete.as_ref().unwrap();
        assert_eq!(complete["channel_id"], "C42");
        assert_eq!(complete["initial_comment"], SLACK_COMMENT);
        assert_eq!(complete["files"][0]["id"], "F123");
    }

    #[test]
    fn test_slack_error_is_delivery_error() {
        let (base, _) = fake_slack(false);
        let sections = vec![ReportSection::new("0 Rogue Types Found", vec![])];
        let err = sink(&base).deliver(&sections).unwrap_err();
        assert_eq!(err.channel, Channel::Slack);
        assert!(err.message.contains("not_in_channel"));
    }

    #[test]
    fn test_empty_report_is_not_uploaded() {
        let (base, seen) = fake_slack(true);
        let err = sink(&base).deliver(&[]).unwrap_err();
        assert!(err.message.contains("nothing to upload"));

        let seen = seen.lock().unwrap();
        assert!(seen.form.is_empty());
        assert!(seen.complete.is_none());
    }

    #[test]
    fn test_missing_channel_id() {
        let raw = "default:\n  base_url: https://x\n  slack_bot_token: xoxb-test\n";
        let config = Config::from_yaml_str(raw, Path::new("test.yaml")).unwrap();
        assert!(matches!(
            SlackSink::from_account(config.account("default").unwrap()),
            Err(AppError::Config(_))
        ));
    }
}
