use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, check_quota};
use crate::error::PersistenceError;

/// Store backed by one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    /// Open a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), quota: None }
    }

    /// Refuse writes of values larger than `bytes`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn write_atomic(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::ReadFailure { key: key.to_string(), source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        check_quota(key, value, self.quota)?;
        self.write_atomic(key, value)
            .map_err(|source| PersistenceError::WriteFailure { key: key.to_string(), source })
    }
}
