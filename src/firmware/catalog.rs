use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::FirmwareRecord;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Records collected during one crawl, in discovery order. Written out once,
/// at the end of the run.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<FirmwareRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FirmwareRecord) {
        self.records.push(record);
    }

    #[allow(unused)]
    pub fn records(&self) -> &[FirmwareRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize every record as one JSON array, replacing `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.records)?;
        writer.flush()?;
        Ok(())
    }
}
