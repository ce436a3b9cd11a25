//! Delivery Sinks
//!
//! Each sink takes the same report sections and ships them somewhere:
//! terminal, SMTP, SendGrid, Slack, or a file on disk. A failed sink
//! only fails its own attempt; the findings stay usable for the others.

pub mod console;
pub mod file;
pub mod sendgrid;
pub mod slack;
pub mod smtp;

use rogue_core::{Channel, ReportSection};
use thiserror::Error;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use sendgrid::SendgridSink;
pub use slack::SlackSink;
pub use smtp::SmtpSink;

/// One failed delivery
#[derive(Debug, Clone, Error)]
#[error("{channel} delivery failed: {message}")]
pub struct DeliveryError {
    pub channel: Channel,
    pub message: String,
}

impl DeliveryError {
    pub fn new(channel: Channel, message: impl Into<String>) -> Self {
        Self {
            channel,
            message: message.into(),
        }
    }
}

/// A report destination
pub trait Sink {
    fn channel(&self) -> Channel;

    /// Deliver the sections; returns a short human-readable receipt
    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError>;
}

/// Run every sink with sections built for its channel.
/// One result per sink, in order; a failure does not stop later sinks.
pub fn deliver_all<F>(sinks: &[Box<dyn Sink>], sections_for: F) -> Vec<Result<String, DeliveryError>>
where
    F: Fn(Channel) -> Vec<ReportSection>,
{
    sinks
        .iter()
        .map(|sink| {
            let channel = sink.channel();
            let result = sink.deliver(&sections_for(channel));
            match &result {
                Ok(receipt) => tracing::info!("{}: {}", channel, receipt),
                Err(e) => tracing::error!("{}", e),
            }
            result
        })
        .collect()
}
