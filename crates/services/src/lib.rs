#![forbid(unsafe_code)]

pub mod error;
pub mod sheet_service;
pub mod transfer;

pub use prep_core::IdSource;

pub use error::{ImportError, SheetServiceError};
pub use sheet_service::SheetService;
pub use transfer::export_file_name;
