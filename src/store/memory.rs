//! Lock-guarded table of integer sequences, backed by a snapshot file

use super::error::{NotFound, StartupError, StoreError};
use super::sequence::{render, Sequence};
use crate::snapshot::{self, SnapshotReader, SnapshotWriter};
use parking_lot::Mutex;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<String, Sequence, BuildHasherDefault<SipHasher13>>;

/// Key-value store mapping names to integer sequences
///
/// Every access to the table goes through one mutex. Guards are scoped to
/// the method body and no method calls another locking method while holding
/// the guard.
pub struct Store {
    /// Snapshot location
    path: PathBuf,

    /// The table itself
    table: Mutex<StoreMap>,
}

impl Store {
    /// Create an empty store bound to `path` (nothing is read or written)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store {
            path: path.into(),
            table: Mutex::new(StoreMap::default()),
        }
    }

    /// Load the snapshot at `path`, or create and persist an empty one if
    /// the file does not exist yet
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self, StartupError> {
        let store = Store::new(path);

        match std::fs::metadata(&store.path) {
            Ok(_) => {
                store.load().map_err(StartupError::Load)?;
                info!("Loaded {} arrays from {:?}", store.len(), store.path);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                store.save().map_err(StartupError::Create)?;
                info!("Created empty database at {:?}", store.path);
            }
            Err(e) => return Err(StartupError::Stat(e)),
        }

        Ok(store)
    }

    /// Snapshot location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the table with the content of the snapshot file
    pub fn load(&self) -> Result<(), StoreError> {
        let reader = SnapshotReader::load(&self.path)?;
        let entries = reader.entries()?;

        let mut table = self.table.lock();
        table.clear();
        table.extend(entries);
        debug!("Snapshot decoded: {} bytes, {} arrays", reader.size(), table.len());

        Ok(())
    }

    /// Write the whole table to the snapshot file
    pub fn save(&self) -> Result<(), StoreError> {
        let table = self.table.lock();
        let bytes = snapshot::encode(table.iter())?;

        SnapshotWriter::new(&self.path).write(&bytes)?;
        info!("Saved {} arrays ({} bytes) to {:?}", table.len(), bytes.len(), self.path);

        Ok(())
    }

    /// Bind `key` to `values`, replacing any previous binding
    pub fn set(&self, key: impl Into<String>, values: Sequence) {
        self.table.lock().insert(key.into(), values);
    }

    /// Copy of the sequence bound to `key`
    pub fn get(&self, key: &str) -> Result<Sequence, StoreError> {
        self.table
            .lock()
            .get(key)
            .cloned()
            .ok_or_else(|| NotFound::Key.into())
    }

    /// Remove `key` entirely
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self.table.lock().remove(key) {
            Some(_) => Ok(()),
            None => Err(NotFound::Key.into()),
        }
    }

    /// Append the elements of `src` to `dest`, leaving `src` untouched
    ///
    /// `dest` is checked before `src`.
    pub fn merge(&self, dest: &str, src: &str) -> Result<(), StoreError> {
        let mut table = self.table.lock();

        if !table.contains_key(dest) {
            return Err(NotFound::Destination.into());
        }
        let tail = table.get(src).cloned().ok_or(NotFound::Source)?;

        if let Some(values) = table.get_mut(dest) {
            values.extend(tail);
        }

        Ok(())
    }

    /// Human-readable rendering of the sequence bound to `key`
    pub fn show(&self, key: &str) -> Result<String, StoreError> {
        let table = self.table.lock();
        let values = table.get(key).ok_or(NotFound::Array)?;
        Ok(render(values))
    }

    /// Sort the sequence bound to `key` in non-decreasing order
    pub fn sort(&self, key: &str) -> Result<(), StoreError> {
        let mut table = self.table.lock();
        let values = table.get_mut(key).ok_or(NotFound::Array)?;
        values.sort_unstable();
        Ok(())
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All bound keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.table.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("arrays", &self.len())
            .finish()
    }
}
