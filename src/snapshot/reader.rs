//! Snapshot reader

use super::codec::{decode, DecodeError};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Raw snapshot bytes read from disk
pub struct SnapshotReader {
    data: Vec<u8>,
}

impl SnapshotReader {
    /// Read the snapshot file in full
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        debug!("Read {} snapshot bytes from {:?}", data.len(), path.as_ref());
        Ok(SnapshotReader { data })
    }

    /// Decode every entry, failing on the first malformation
    pub fn entries(&self) -> Result<Vec<(String, Vec<i64>)>, DecodeError> {
        decode(&self.data)
    }

    /// Get the total size of the snapshot data
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{encode, SnapshotWriter};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snap.wkn");

        let mut table = HashMap::new();
        table.insert("key1".to_string(), vec![1, 2]);
        table.insert("key2".to_string(), vec![]);
        SnapshotWriter::new(&path).write(&encode(table.iter()).unwrap()).unwrap();

        let reader = SnapshotReader::load(&path).unwrap();
        let entries = reader.entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("key1".to_string(), vec![1, 2]));
        assert_eq!(entries[1], ("key2".to_string(), vec![]));
        assert_eq!(reader.size(), std::fs::metadata(&path).unwrap().len() as usize);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SnapshotReader::load(dir.path().join("absent")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
