//! Record cleaning service
//!
//! Strips everything outside `[0-9]` from every field. A field with
//! no digits at all becomes the empty string; that is surfaced later,
//! when the checked file is parsed for storage, not silently patched
//! here.

use crate::model::RawRecord;

/// Produce a cleaned copy of a record set. Input order and row count
/// are preserved; the input itself is untouched.
pub fn clean_records(records: &[RawRecord]) -> Vec<RawRecord> {
    records.iter().map(clean_record).collect()
}

fn clean_record(record: &RawRecord) -> RawRecord {
    RawRecord {
        vehicle_id: strip_non_digits(&record.vehicle_id),
        engine_capacity: strip_non_digits(&record.engine_capacity),
        fuel_consumption: strip_non_digits(&record.fuel_consumption),
        maximum_load: strip_non_digits(&record.maximum_load),
    }
}

fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
