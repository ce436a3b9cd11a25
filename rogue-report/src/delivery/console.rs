//! Console sink

use std::io::Write;

use rogue_core::{render, Channel, ReportFormat, ReportSection};

use super::{DeliveryError, Sink};

/// Prints coloured tables to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn channel(&self) -> Channel {
        Channel::Console
    }

    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError> {
        let text = render(sections, ReportFormat::Console)
            .map_err(|e| DeliveryError::new(Channel::Console, e.to_string()))?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| DeliveryError::new(Channel::Console, e.to_string()))?;

        Ok(format!("printed {} section(s)", sections.len()))
    }
}
