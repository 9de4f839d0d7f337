#![forbid(unsafe_code)]

//! Persistence seam for the sheet store: the repository contract plus the
//! JSON-slot adapter that mirrors the in-memory sheet to disk.

pub mod json_file;
pub mod repository;

pub use json_file::{JsonFileStore, STORAGE_KEY, default_data_dir};
pub use repository::{InMemorySheetStore, SheetRepository, StorageError};
