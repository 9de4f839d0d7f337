use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use prep_core::model::Sheet;

use crate::repository::{SheetRepository, StorageError};

/// Versioned storage key. Bumping the version changes the file name, which
/// makes older snapshots invisible: a bump means "start fresh", never a
/// migration.
pub const STORAGE_KEY: &str = "prepsheet-storage-v1";

/// Per-user data directory for the default storage slot.
///
/// Returns `None` on platforms without a resolvable home directory.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "prepsheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Stores the whole sheet as one pretty-printed JSON document at
/// `<dir>/<STORAGE_KEY>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Full path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetRepository for JsonFileStore {
    fn load(&self) -> Result<Option<Sheet>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let sheet = serde_json::from_str(&raw)?;
        Ok(Some(sheet))
    }

    fn save(&self, sheet: &Sheet) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write via a sibling temp file and rename, so a failed write never
        // truncates the previous snapshot.
        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(sheet)?;
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(body.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        log::debug!("persisted sheet snapshot to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_uses_the_versioned_key() {
        let store = JsonFileStore::new("/tmp/prep");
        assert!(store.path().ends_with("prepsheet-storage-v1.json"));
    }
}
