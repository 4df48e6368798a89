use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use super::Storage;

/// Directory under the user data dir when none is supplied
const APP_DIR: &str = "fitlink";

/// File-backed storage: one file per key under a fixed directory.
/// Values are stored verbatim; the session layer decides what goes in
/// them (a bare token, a serialized user blob).
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Storage rooted at the platform user data directory.
    pub fn in_user_data_dir() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find user data directory"))?;
        Self::new(data_dir.join(APP_DIR))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read storage entry");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            warn!(key, error = %e, "failed to write storage entry");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => debug!(key, "storage entry removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(key, error = %e, "failed to remove storage entry"),
        }
    }
}
