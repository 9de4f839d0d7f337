//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::QuestionError;
use storage::StorageError;

/// Errors from the import half of the backup protocol. Any of these leaves
/// the store untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("backup document is not a list of workspaces: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("backup document contains no workspaces")]
    Empty,
}

/// Errors emitted by `SheetService`.
///
/// `Question` and `Import` are validation failures raised before any
/// mutation. `Storage` is different: by the time it surfaces, the in-memory
/// mutation has already committed and is kept; only the persisted mirror is
/// stale.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetServiceError {
    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("export serialization failed: {0}")]
    Export(#[source] serde_json::Error),
}
