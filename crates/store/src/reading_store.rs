use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use condmon_core::reading::Reading;

use crate::error::StoreError;
use crate::record::{ReadingRecord, RecordError, HEADER};

/// Append-only CSV file holding every submitted reading.
///
/// The file is re-read in full on every [`load`](Self::load). Each
/// [`append`](Self::append) encodes the complete row before issuing a single
/// write, so a row is never split between writers. Concurrent appends are not
/// otherwise coordinated.
#[derive(Debug, Clone)]
pub struct ReadingStore {
    path: PathBuf,
}

impl ReadingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a header-only file when none exists yet.
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_initialized(&self) -> Result<bool, StoreError> {
        if !self.needs_header()? {
            return Ok(false);
        }
        self.create_parent_dir()?;
        fs::write(&self.path, encode(&[], true)?)?;
        tracing::info!(path = %self.path.display(), "Initialized reading file");
        Ok(true)
    }

    /// Append one reading, writing the header first if the file is new.
    pub fn append(&self, reading: &Reading) -> Result<(), StoreError> {
        let with_header = self.needs_header()?;
        let bytes = encode(std::slice::from_ref(reading), with_header)?;

        self.create_parent_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;

        tracing::info!(
            equipment = %reading.equipment,
            date = %reading.date,
            is_running = reading.is_running,
            "Appended reading"
        );
        Ok(())
    }

    /// Load every decodable reading, in file order.
    ///
    /// A missing or empty file yields no readings. Rows with an unparsable
    /// date or an undecodable field are skipped.
    pub fn load(&self) -> Result<Vec<Reading>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Reading file missing, no data");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        let mut readings = Vec::new();
        for (index, result) in reader.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let decoded = result.and_then(|mut raw| {
                // Short rows predate the trailing columns.
                while raw.len() < headers.len() {
                    raw.push_field("");
                }
                raw.deserialize::<ReadingRecord>(Some(&headers))
            });
            let record = match decoded {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(line, error = %e, "Skipping undecodable reading row");
                    continue;
                }
            };
            match record.into_reading() {
                Ok(reading) => readings.push(reading),
                Err(e @ RecordError::Date(_)) => {
                    tracing::debug!(line, error = %e, "Skipping reading row");
                }
                Err(e) => {
                    tracing::warn!(line, error = %e, "Skipping reading row");
                }
            }
        }

        tracing::debug!(count = readings.len(), "Loaded readings");
        Ok(readings)
    }

    fn needs_header(&self) -> Result<bool, StoreError> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    fn create_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

/// Render readings as a standalone CSV document with the file header.
pub fn export_csv(readings: &[Reading]) -> Result<String, StoreError> {
    let bytes = encode(readings, true)?;
    String::from_utf8(bytes)
        .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn encode(readings: &[Reading], with_header: bool) -> Result<Vec<u8>, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    if with_header {
        writer.write_record(HEADER)?;
    }
    for reading in readings {
        writer.serialize(ReadingRecord::from(reading))?;
    }
    writer.into_inner().map_err(|e| StoreError::Io(e.into_error()))
}
