use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of records kept in the history log
pub const MAX_HISTORY_RECORDS: usize = 10;

/// One completed conversion as shown in the history list
///
/// Serialized with the keys `from`, `to`, `timestamp` and `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "from")]
    from_label: String,
    #[serde(rename = "to")]
    to_label: String,
    timestamp: String,
    date: String,
}

impl HistoryRecord {
    /// Create a record stamped with the current local time
    pub fn new(from_label: impl Into<String>, to_label: impl Into<String>) -> Self {
        Self::stamped(from_label, to_label, Local::now())
    }

    /// Create a record stamped with the given time (`HH:MM:SS` / `YYYY-MM-DD`)
    pub fn stamped(
        from_label: impl Into<String>,
        to_label: impl Into<String>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            from_label: from_label.into(),
            to_label: to_label.into(),
            timestamp: at.format("%H:%M:%S").to_string(),
            date: at.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn from_label(&self) -> &str {
        &self.from_label
    }

    pub fn to_label(&self) -> &str {
        &self.to_label
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Newest-first list of records, never longer than [`MAX_HISTORY_RECORDS`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from stored records, keeping only the newest entries
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        records.truncate(MAX_HISTORY_RECORDS);
        Self { records }
    }

    /// Insert at the front, evicting the oldest record on overflow
    pub fn push_front(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY_RECORDS);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
