use std::sync::Mutex;

use prep_core::model::Sheet;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository contract for the persisted sheet snapshot.
///
/// The in-memory sheet is the source of truth; the repository is a
/// best-effort mirror written through after every mutation. Both operations
/// are synchronous: the whole snapshot is one small JSON document and there
/// is a single writer.
pub trait SheetRepository: Send + Sync {
    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has ever been written (first run,
    /// or a storage-key version bump).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the slot exists but cannot be read or
    /// decoded. Callers treat this the same as `Ok(None)`: start fresh.
    fn load(&self) -> Result<Option<Sheet>, StorageError>;

    /// Replace the persisted snapshot with `sheet`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written. The caller's
    /// in-memory state is unaffected.
    fn save(&self, sheet: &Sheet) -> Result<(), StorageError>;
}

/// In-memory repository for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemorySheetStore {
    slot: Mutex<Option<Sheet>>,
}

impl InMemorySheetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently persisted snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Sheet> {
        self.slot.lock().expect("sheet slot poisoned").clone()
    }
}

impl SheetRepository for InMemorySheetStore {
    fn load(&self) -> Result<Option<Sheet>, StorageError> {
        Ok(self.slot.lock().expect("sheet slot poisoned").clone())
    }

    fn save(&self, sheet: &Sheet) -> Result<(), StorageError> {
        *self.slot.lock().expect("sheet slot poisoned") = Some(sheet.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips_a_sheet() {
        let store = InMemorySheetStore::new();
        assert!(store.load().unwrap().is_none());

        let sheet = Sheet::initial();
        store.save(&sheet).unwrap();
        assert_eq!(store.load().unwrap(), Some(sheet));
    }
}
