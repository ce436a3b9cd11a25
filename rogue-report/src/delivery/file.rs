//! File sink (`show --save`)

use std::fs;
use std::path::PathBuf;

use rogue_core::{render, Channel, ReportFormat, ReportSection};

use super::{DeliveryError, Sink};

/// Writes the rendered report to a path, creating parent directories
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn html(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ReportFormat::Html)
    }
}

impl Sink for FileSink {
    fn channel(&self) -> Channel {
        Channel::File
    }

    fn deliver(&self, sections: &[ReportSection]) -> Result<String, DeliveryError> {
        let fail = |e: String| DeliveryError::new(Channel::File, format!("{}: {}", self.path.display(), e));

        let text = render(sections, self.format).map_err(|e| fail(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
        }
        fs::write(&self.path, text).map_err(|e| fail(e.to_string()))?;

        Ok(format!("saved {} report to {}", self.format, self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_html_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("rogues_found.html");
        let sink = FileSink::html(&path);

        let receipt = sink
            .deliver(&[ReportSection::new("0 Rogue Types Found", vec![])])
            .unwrap();

        assert!(receipt.contains("rogues_found.html"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h2>0 Rogue Types Found</h2>"));
    }

    #[test]
    fn test_unwritable_path_is_delivery_error() {
        let dir = tempdir().unwrap();
        // a directory cannot be overwritten by a file
        let sink = FileSink::new(dir.path(), ReportFormat::Csv);
        let err = sink.deliver(&[]).unwrap_err();
        assert_eq!(err.channel, Channel::File);
    }
}
