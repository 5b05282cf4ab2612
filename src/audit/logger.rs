//! Append-only request log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SpendError, SpendResult};

use super::entry::RequestEntry;

/// Writes request entries to the log file and reads them back
pub struct RequestLogger {
    log_path: PathBuf,
}

impl RequestLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &RequestEntry) -> SpendResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SpendError::Io(format!("Failed to open request log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| SpendError::Json(format!("Failed to serialize request: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SpendError::Io(format!("Failed to write request: {}", e)))?;

        file.flush()
            .map_err(|e| SpendError::Io(format!("Failed to flush request log: {}", e)))?;

        debug!(path = %self.log_path.display(), "request log appended");
        Ok(())
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> SpendResult<Vec<RequestEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SpendError::Io(format!("Failed to open request log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                SpendError::Io(format!("Failed to read request log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: RequestEntry = serde_json::from_str(&line).map_err(|e| {
                SpendError::Json(format!(
                    "Failed to parse request at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendResult<Vec<RequestEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{CardWizard, FieldUpdate};
    use tempfile::TempDir;

    fn create_test_logger() -> (RequestLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("requests.log");
        let logger = RequestLogger::new(log_path);
        (logger, temp_dir)
    }

    fn entry(name: &str) -> RequestEntry {
        let mut wizard = CardWizard::new();
        wizard.set_field(FieldUpdate::CardName(name.to_string()));
        RequestEntry::submitted(&wizard.submit())
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&entry("Ops Card")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].card_name, "Ops Card");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&entry(&format!("Card {}", i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let names: Vec<_> = recent.iter().map(|e| e.card_name.as_str()).collect();
        assert_eq!(names, vec!["Card 7", "Card 8", "Card 9"]);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.log(&entry("Travel")).unwrap();

        let reopened = RequestLogger::new(temp.path().join("requests.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();
        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
