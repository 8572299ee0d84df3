//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File the history log is stored in, relative to the data directory
pub const HISTORY_FILE: &str = "conversionHistory.json";

/// Builder for a throwaway data directory
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to the history file
    pub fn with_history_json(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(HISTORY_FILE), content)
            .expect("Failed to write history file");
        self
    }

    /// Write history records, newest first
    pub fn with_records(self, records: &[RecordBuilder]) -> Self {
        let content =
            format!("[{}]", records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join(","));
        self.with_history_json(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the history file inside `dir`
pub fn history_path(dir: &Path) -> PathBuf {
    dir.join(HISTORY_FILE)
}

/// Parse the stored history file into `(from, to)` pairs
pub fn read_stored_labels(dir: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(history_path(dir)).expect("Failed to read history file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("History is not JSON");
    value
        .as_array()
        .expect("History is not an array")
        .iter()
        .map(|r| {
            (r["from"].as_str().unwrap().to_string(), r["to"].as_str().unwrap().to_string())
        })
        .collect()
}

/// Builder for one stored history record
pub struct RecordBuilder {
    from: String,
    to: String,
    timestamp: String,
    date: String,
}

impl RecordBuilder {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: "12:00:00".to_string(),
            date: "2024-01-15".to_string(),
        }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Convert to JSON, escaping through serde so any label survives
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "from": self.from,
            "to": self.to,
            "timestamp": self.timestamp,
            "date": self.date,
        })
        .to_string()
    }
}
