use tracing::{debug, warn};

use crate::confirm::{CONFIRM_CLEAR_PROMPT, Confirm};
use crate::error::PersistenceError;
use crate::models::{HistoryLog, HistoryRecord};
use crate::storage::KeyValueStore;

/// Storage key the serialized log lives under
pub const HISTORY_KEY: &str = "conversionHistory";

type Listener = Box<dyn FnMut(&HistoryLog)>;

/// Owner of the history log and the only code that mutates it
pub struct HistoryStore<S> {
    storage: S,
    log: HistoryLog,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Restore the log from `storage`
    pub fn open(storage: S) -> Self {
        let log = load_history(&storage);
        Self { storage, log, listeners: Vec::new() }
    }

    /// Register a callback run with the new log after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&HistoryLog) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Prepend a record stamped with the current time
    pub fn record(&mut self, from_label: impl Into<String>, to_label: impl Into<String>) {
        self.push(HistoryRecord::new(from_label, to_label));
    }

    /// Prepend an existing record, evicting the oldest past the limit
    pub fn push(&mut self, record: HistoryRecord) {
        self.log.push_front(record);
        self.save();
        self.notify();
    }

    /// Empty the log once the user agrees
    ///
    /// Returns `true` if the log was cleared. An already empty log is left alone
    /// without asking.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> bool {
        if self.log.is_empty() {
            return false;
        }
        if !confirm.confirm(CONFIRM_CLEAR_PROMPT) {
            debug!("History clear declined");
            return false;
        }

        self.log.clear();
        self.save();
        self.notify();
        true
    }

    /// Write the current log, logging instead of failing
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            warn!(error = %e, "Failed to save conversion history");
            warn!("History will not be persisted across sessions");
        }
    }

    fn try_save(&mut self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&self.log).map_err(|source| {
            PersistenceError::Corrupt { key: HISTORY_KEY.to_string(), source }
        })?;
        self.storage.set(HISTORY_KEY, &json)
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.log);
        }
    }
}

/// Read the stored log; absent, unreadable or corrupt data gives an empty log
pub fn load_history<S: KeyValueStore + ?Sized>(storage: &S) -> HistoryLog {
    match try_load(storage) {
        Ok(log) => log,
        Err(e) => {
            warn!(error = %e, "Failed to load conversion history, starting empty");
            HistoryLog::new()
        }
    }
}

fn try_load<S: KeyValueStore + ?Sized>(storage: &S) -> Result<HistoryLog, PersistenceError> {
    let Some(json) = storage.get(HISTORY_KEY)? else {
        debug!("No stored conversion history");
        return Ok(HistoryLog::new());
    };

    // `null` is what an explicitly emptied browser store held
    let records: Option<Vec<HistoryRecord>> = serde_json::from_str(&json)
        .map_err(|source| PersistenceError::Corrupt { key: HISTORY_KEY.to_string(), source })?;

    let log = HistoryLog::from_records(records.unwrap_or_default());
    debug!(records = log.len(), "Loaded conversion history");
    Ok(log)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::MAX_HISTORY_RECORDS;
    use crate::storage::MemoryStore;

    fn stored(store: &HistoryStore<MemoryStore>) -> Option<String> {
        store.storage().get(HISTORY_KEY).unwrap()
    }

    #[test]
    fn test_open_empty_storage() {
        let store = HistoryStore::open(MemoryStore::new());
        assert!(store.log().is_empty());
    }

    #[test]
    fn test_record_persists_full_log() {
        let mut store = HistoryStore::open(MemoryStore::new());
        store.record("0°C", "32°F");
        store.record("100°C", "212°F");

        let reloaded = load_history(store.storage());
        assert_eq!(&reloaded, store.log());
        assert_eq!(reloaded.records()[0].from_label(), "100°C");
    }

    #[test]
    fn test_eleven_records_keep_ten_newest() {
        let mut store = HistoryStore::open(MemoryStore::new());
        for n in 1..=11 {
            store.record(format!("{}°C", n), "x");
        }

        assert_eq!(store.log().len(), MAX_HISTORY_RECORDS);
        let labels: Vec<_> = store.log().iter().map(|r| r.from_label().to_string()).collect();
        let expected: Vec<_> = (2..=11).rev().map(|n| format!("{}°C", n)).collect();
        assert_eq!(labels, expected);
        assert_eq!(load_history(store.storage()).len(), MAX_HISTORY_RECORDS);
    }

    #[test]
    fn test_clear_declined_keeps_log() {
        let mut store = HistoryStore::open(MemoryStore::new());
        store.record("0°C", "32°F");

        assert!(!store.clear(&mut |_: &str| false));
        assert_eq!(store.log().len(), 1);
    }

    #[test]
    fn test_clear_confirmed_persists_empty_log() {
        let mut store = HistoryStore::open(MemoryStore::new());
        store.record("0°C", "32°F");

        assert!(store.clear(&mut |_: &str| true));
        assert!(store.log().is_empty());
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_empty_log_does_not_prompt() {
        let mut store = HistoryStore::open(MemoryStore::new());
        let mut asked = false;
        assert!(!store.clear(&mut |_: &str| {
            asked = true;
            true
        }));
        assert!(!asked);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = HistoryStore::open(MemoryStore::new().with_quota(0));
        store.record("0°C", "32°F");

        assert_eq!(store.log().len(), 1);
        assert!(stored(&store).is_none());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let storage = MemoryStore::new().with_value(HISTORY_KEY, "{not json");
        let store = HistoryStore::open(storage);
        assert!(store.log().is_empty());
    }

    #[test]
    fn test_null_storage_loads_empty() {
        let storage = MemoryStore::new().with_value(HISTORY_KEY, "null");
        assert!(load_history(&storage).is_empty());
    }

    #[test]
    fn test_oversized_stored_log_is_truncated() {
        let records: Vec<_> = (0..12).map(|n| HistoryRecord::new(format!("{}°F", n), "x")).collect();
        let json = serde_json::to_string(&records).unwrap();
        let storage = MemoryStore::new().with_value(HISTORY_KEY, &json);

        let log = load_history(&storage);
        assert_eq!(log.len(), MAX_HISTORY_RECORDS);
        assert_eq!(log.records()[0].from_label(), "0°F");
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = HistoryStore::open(MemoryStore::new());

        let sink = Rc::clone(&seen);
        store.subscribe(move |log| sink.borrow_mut().push(log.len()));

        store.record("0°C", "32°F");
        store.record("10°C", "50°F");
        store.clear(&mut |_: &str| true);

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }
}
