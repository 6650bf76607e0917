//! Persistence implementations
//!
//! SQLite-backed implementation of the domain repository trait.

mod sqlite_convoy_repo;

pub use sqlite_convoy_repo::SqliteConvoyRepository;
