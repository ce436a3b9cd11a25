//! SMTP sink
//!
//! Sends the report as one message to every configured recipient, HTML by
//! default or an ASCII table with `--plain`.

use std::time::Duration;

use lettre::message::{header::ContentType, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use rogue_core::{render, Channel, ReportFormat, ReportSection};

use super::{DeliveryError, Sink};
use crate::config::AccountConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct SmtpSink {
    host: String,
    port: u16,
    username: Option<String>,
    password: Option<String>,
    starttls: bool,
    from: String,
    to: Vec<String>,
    subject: String,
    format: ReportFormat,
    timeout: Duration,
}

impl SmtpSink {
    pub fn from_account(account: &AccountConfig, plain: bool) -> AppResult<Self> {
        let smtp = account
            .smtp
            .as_ref()
            .ok_or_else(|| AppError::Config("no `smtp` settings for this account".to_string()))?;
        let from = account
            .from_email
            .clone()
            .ok_or_else(|| AppError::Config("`from_email` is required for SMTP".to_string()))?;

        Ok(Self {
            host: smtp.host.clone(),
            port: smtp.port,
            username: smtp.username.clone(),
            password: smtp.password.clone(),
            starttls: smtp.starttls,
            from,
            to: account.to_emails.clone(),
            subject: account.subject.clone(),
            format: if plain { ReportFormat::Plain } else { ReportFormat::Html },
            timeout: Duration::from_secs(account.timeout_secs),
        })
    }

    fn fail(&self, message: impl Into<String>) -> DeliveryError {
        DeliveryError::new(Channel::Smtp, message)
    }

    /// Build the message without sending it
    pub fn build_message(&self, sections: &[ReportSection]) -> Result<Message, DeliveryError> {
        if self.to.is_empty() {
            return Err(self.fail("no recipients configured (to_emails is empty)"));
        }

        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| self.fail(format!("bad sender {}: {}", self.from, e)))?;

        let mut builder = Message::builder().from(from).subject(self.subject.clone());
        for to in &self.to {
            let mailbox: Mailbox = to
                .parse()
                .map_err(|e| self.fail(format!("bad recipient {}: {}", to, e)))?;
            builder = builder.to(mailbox);
        }

        let content_type = match self.format {
            ReportFormat::Html => ContentType::TEXT_HTML,
            _ => ContentType::TEXT_PLAIN,
        };
        let body = render(sections, self.format).map_err(|e| self.fail(e.to_string()))?;

        builder
            .header(content_type)
            .body(body)
            .map_err(|e| self.fail(e.to_string()))
    }

    fn transport(&self) -> Result<SmtpTransport, DeliveryError> {
        let builder = if self.starttls {
            SmtpTransport::starttls_relay(&self.host).map_err(|e| self.fail(e.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(&self.host)
        };

        let builder = builder.port(self.port).timeout(Some(self.timeout));
        let builder = match (&self.username, &self.password) {
            (Some(user), Some(pass)) => builder.credentials(Credentials::new(user.clone(), pass.clone())),
            _ => builder,
        };

        Ok(builder.build())
    }
}

impl Sink for SmtpSink {
    fn channel(&self) -> Channel {
        Channel::Smtp
    }

    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError> {
        let message = self.build_message(sections)?;
        let mailer = self.transport()?;

        tracing::debug!("SMTP {}:{} starttls={}", self.host, self.port, self.starttls);
        mailer
            .send(&message)
            .map_err(|e| self.fail(format!("{}:{}: {}", self.host, self.port, e)))?;

        Ok(format!("sent to {}", self.to.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::Path;

    fn account(extra: &str) -> AccountConfig {
        let raw = format!(
            "default:\n  base_url: https://x\n  from_email: rogues@example.com\n  smtp:\n    host: 127.0.0.1\n    port: 1\n  timeout_secs: 2\n{}",
            extra
        );
        Config::from_yaml_str(&raw, Path::new("test.yaml"))
            .unwrap()
            .account("default")
            .unwrap()
            .clone()
    }

    fn sections() -> Vec<ReportSection> {
        vec![ReportSection::new("0 Rogue Types Found", vec![])]
    }

    #[test]
    fn test_html_message_headers() {
        let sink = SmtpSink::from_account(&account("  to_emails: [noc@example.com]\n"), false).unwrap();
        let message = sink.build_message(&sections()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Wireless Rogue AP Alert"));
        assert!(raw.contains("To: noc@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_plain_message() {
        let sink = SmtpSink::from_account(&account("  to_emails: [noc@example.com]\n"), true).unwrap();
        let raw = String::from_utf8(sink.build_message(&sections()).unwrap().formatted()).unwrap();
        assert!(raw.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_no_recipients_is_delivery_error() {
        let sink = SmtpSink::from_account(&account(""), false).unwrap();
        let err = sink.deliver(&sections()).unwrap_err();
        assert_eq!(err.channel, Channel::Smtp);
        assert!(err.message.contains("no recipients"));
    }

    #[test]
    fn test_missing_smtp_settings() {
        let raw = "default:\n  base_url: https://x\n  from_email: a@example.com\n";
        let config = Config::from_yaml_str(raw, Path::new("test.yaml")).unwrap();
        let result = SmtpSink::from_account(config.account("default").unwrap(), false);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_unreachable_relay_is_delivery_error() {
        let sink = SmtpSink::from_account(&account("  to_emails: [noc@example.com]\n"), false).unwrap();
        let err = sink.deliver(&sections()).unwrap_err();
        assert!(err.message.contains("127.0.0.1:1"));
    }
}
