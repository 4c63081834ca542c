//! Snapshot writer
//!
//! Writes go to a sibling `<name>.tmp` file which is synced and then renamed
//! over the target, so the target is either the old or the new snapshot.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot writer
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer targeting `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SnapshotWriter {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Replace the target file with `bytes`
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let temp_path = self.temp_path()?;

        let result = (|| {
            let mut file = File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> io::Result<PathBuf> {
        let name = self.path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a file path", self.path.display()),
            )
        })?;

        let mut temp_name = OsString::from(name);
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".wkn");

        let writer = SnapshotWriter::new(&path);
        writer.write(b"first").unwrap();
        writer.write(b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!dir.path().join(".wkn.tmp").exists());
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(".wkn");

        assert!(SnapshotWriter::new(&path).write(b"data").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_directory_path() {
        let writer = SnapshotWriter::new("/");
        let err = writer.write(b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
