//! Import/export halves of the backup protocol.
//!
//! Export serializes every workspace (not just the active one) as an
//! indented JSON array. Import validates the whole document before the
//! store replaces anything, so a bad backup can never leave the store
//! partially applied.

use chrono::{DateTime, Utc};
use prep_core::model::Workspace;

use crate::error::ImportError;

/// Serializes workspaces as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn export_workspaces(workspaces: &[Workspace]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(workspaces)
}

/// Suggested download name for an export taken at `at`, e.g.
/// `prepsheet-backup-2026-08-24.json`.
#[must_use]
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("prepsheet-backup-{}.json", at.format("%Y-%m-%d"))
}

/// Decodes a backup document into a workspace list.
///
/// # Errors
///
/// Returns `ImportError::Malformed` when the document is not a JSON array
/// of workspace-shaped objects, and `ImportError::Empty` when the array has
/// no entries.
pub fn parse_backup(json: &str) -> Result<Vec<Workspace>, ImportError> {
    let workspaces: Vec<Workspace> = serde_json::from_str(json)?;
    if workspaces.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(workspaces)
}
