//! Infrastructure layer: file formats and the SQLite-backed store.

pub mod export;
pub mod persistence;
pub mod records_csv;
pub mod spreadsheet;
