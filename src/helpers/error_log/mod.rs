use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::warn;

/// Append-only text log of recoverable crawl errors. Each entry names the
/// remote directory the error happened in.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write one entry. A failing log file is reported but never stops the
    /// crawl.
    pub fn record(&self, error: &dyn Display, directory: &str) {
        warn!(%error, directory, "recoverable error");
        if let Err(e) = self.append(&format_entry(error, directory)) {
            warn!(path = %self.path.display(), "failed to write error log: {e}");
        }
    }

    fn append(&self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(entry.as_bytes())
    }
}

fn format_entry(error: &dyn Display, directory: &str) -> String {
    format!("Errormessage: {error}\nDirectory: {directory}\n")
}
