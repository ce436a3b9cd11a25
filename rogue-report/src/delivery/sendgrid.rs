//! SendGrid sink (`email` command)

use std::time::Duration;

use rogue_core::{render, Channel, ReportFormat, ReportSection};
use serde_json::{json, Value};

use super::{DeliveryError, Sink};
use crate::config::AccountConfig;
use crate::error::{AppError, AppResult};

pub const SENDGRID_MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Clone)]
pub struct SendgridSink {
    url: String,
    api_key: String,
    from: String,
    to: Vec<String>,
    subject: String,
    timeout: Duration,
}

impl SendgridSink {
    pub fn from_account(account: &AccountConfig) -> AppResult<Self> {
        let api_key = account
            .sendgrid_api_key
            .clone()
            .ok_or_else(|| AppError::Config("`sendgrid_api_key` is not set".to_string()))?;
        let from = account
            .from_email
            .clone()
            .ok_or_else(|| AppError::Config("`from_email` is required for SendGrid".to_string()))?;

        Ok(Self {
            url: account
                .sendgrid_url
                .clone()
                .unwrap_or_else(|| SENDGRID_MAIL_SEND_URL.to_string()),
            api_key,
            from,
            to: account.to_emails.clone(),
            subject: account.subject.clone(),
            timeout: Duration::from_secs(account.timeout_secs),
        })
    }

    pub fn recipients(&self) -> &[String] {
        &self.to
    }

    /// v3 mail/send body
    pub fn payload(&self, html: &str) -> Value {
        let to: Vec<Value> = self.to.iter().map(|email| json!({ "email": email })).collect();
        json!({
            "personalizations": [{ "to": to }],
            "from": { "email": self.from },
            "subject": self.subject,
            "content": [{ "type": "text/html", "value": html }],
        })
    }
}

impl Sink for SendgridSink {
    fn channel(&self) -> Channel {
        Channel::Sendgrid
    }

    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError> {
        let fail = |message: String| DeliveryError::new(Channel::Sendgrid, message);

        if self.to.is_empty() {
            return Err(fail("no recipients configured (to_emails is empty)".to_string()));
        }

        let html = render(sections, ReportFormat::Html).map_err(|e| fail(e.to_string()))?;

        let response = ureq::post(&self.url)
            .timeout(self.timeout)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(self.payload(&html));

        match response {
            Ok(resp) => Ok(format!("sendgrid accepted (HTTP {})", resp.status())),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(fail(format!("HTTP {}: {}", code, body.trim())))
            }
            Err(e) => Err(fail(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::spawn_server;
    use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(String, Value)>>>;

    fn sink(url: &str, to: &str) -> SendgridSink {
        let raw = format!(
            "default:\n  base_url: https://x\n  sendgrid_api_key: SG.key\n  from_email: rogues@example.com\n  sendgrid_url: {}/v3/mail/send\n  to_emails: {}\n",
            url, to
        );
        let config = Config::from_yaml_str(&raw, Path::new("test.yaml")).unwrap();
        SendgridSink::from_account(config.account("default").unwrap()).unwrap()
    }

    async fn mail_send(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        captured.lock().unwrap().push((auth, body));
        StatusCode::ACCEPTED
    }

    #[test]
    fn test_posts_html_report() {
        let captured: Captured = Arc::default();
        let state = captured.clone();
        let base = spawn_server(move |_| {
            Router::new()
                .route("/v3/mail/send", post(mail_send))
                .with_state(state)
        });

        let sink = sink(&base, "[noc@example.com, soc@example.com]");
        let receipt = sink
            .deliver(&[ReportSection::new("0 Rogue Types Found", vec![])])
            .unwrap();
        assert!(receipt.contains("202"));

        let captured = captured.lock().unwrap();
        let (auth, body) = &captured[0];
        assert_eq!(auth, "Bearer SG.key");
        assert_eq!(body["subject"], "Wireless Rogue AP Alert");
        assert_eq!(body["from"]["email"], "rogues@example.com");
        assert_eq!(body["personalizations"][0]["to"][1]["email"], "soc@example.com");
        assert_eq!(body["content"][0]["type"], "text/html");
        assert!(body["content"][0]["value"]
            .as_str()
            .unwrap()
            .contains("0 Rogue Types Found"));
    }

    #[test]
    fn test_rejected_request_is_delivery_error() {
        let base = spawn_server(|_| {
            Router::new().route(
                "/v3/mail/send",
                post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
            )
        });

        let err = sink(&base, "[noc@example.com]").deliver(&[]).unwrap_err();
        assert_eq!(err.channel, Channel::Sendgrid);
        assert!(err.message.contains("401"));
    }

    #[test]
    fn test_no_recipients() {
        let err = sink("http://127.0.0.1:1", "[]").deliver(&[]).unwrap_err();
        assert!(err.message.contains("no recipients"));
    }
}
