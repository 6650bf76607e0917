//! Change audit service
//!
//! Counts how many cells the cleaner actually changed, via an
//! explicit cell-by-cell scan of the two parallel record sets. The
//! count only feeds the run summary; nothing downstream depends on
//! it.

use convoy_types::{Error, Result};

use crate::model::RawRecord;

/// Count the cells whose value differs between the original and the
/// cleaned record set. A row-count mismatch between the two sets
/// means an earlier stage corrupted the data and is an error.
pub fn count_corrections(original: &[RawRecord], cleaned: &[RawRecord]) -> Result<usize> {
    if original.len() != cleaned.len() {
        return Err(Error::ShapeMismatch {
            original: original.len(),
            cleaned: cleaned.len(),
        });
    }

    let mut corrected = 0;
    for (before, after) in original.iter().zip(cleaned) {
        for (old, new) in before.fields().iter().zip(after.fields()) {
            if *old != new {
                corrected += 1;
            }
        }
    }
    Ok(corrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, engine: &str, fuel: &str, load: &str) -> RawRecord {
        RawRecord {
            vehicle_id: id.to_string(),
            engine_capacity: engine.to_string(),
            fuel_consumption: fuel.to_string(),
            maximum_load: load.to_string(),
        }
    }

    #[test]
    fn test_counts_changed_cells() {
        let original = vec![raw("12a", "3.5", "6", "7kg")];
        let cleaned = vec![raw("12", "35", "6", "7")];
        assert_eq!(count_corrections(&original, &cleaned).unwrap(), 3);
    }

    #[test]
    fn test_clean_input_counts_zero() {
        let records = vec![raw("1", "400", "60", "20"), raw("2", "300", "50", "25")];
        assert_eq!(count_corrections(&records, &records.clone()).unwrap(), 0);
    }

    #[test]
    fn test_counts_across_multiple_rows() {
        let original = vec![raw("1", "400", "60", "20"), raw("2x", "300t", "50", "25")];
        let cleaned = vec![raw("1", "400", "60", "20"), raw("2", "300", "50", "25")];
        assert_eq!(count_corrections(&original, &cleaned).unwrap(), 2);
    }

    #[test]
    fn test_row_count_mismatch_is_error() {
        let original = vec![raw("1", "400", "60", "20")];
        let err = count_corrections(&original, &[]).unwrap_err();
        match err {
            Error::ShapeMismatch { original, cleaned } => {
                assert_eq!(original, 1);
                assert_eq!(cleaned, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_two_empty_sets_audit_cleanly() {
        assert_eq!(count_corrections(&[], &[]).unwrap(), 0);
    }
}
