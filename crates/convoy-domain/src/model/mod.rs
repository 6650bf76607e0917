//! Domain model types

pub mod record;

pub use record::{RawRecord, Vehicle, HEADER};
