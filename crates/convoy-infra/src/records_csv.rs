//! CSV reader/writer for vehicle record files
//!
//! Both the intermediate CSV and the checked CSV use the same
//! four-column header. Fields are kept verbatim; nothing is trimmed
//! or coerced, so the cleaning audit sees exactly what was on disk.

use std::path::Path;

use convoy_domain::model::{RawRecord, HEADER};
use convoy_types::{Error, Result};

/// Read a record file, validating the header row
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    validate_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(RawRecord {
            vehicle_id: row.get(0).unwrap_or("").to_string(),
            engine_capacity: row.get(1).unwrap_or("").to_string(),
            fuel_consumption: row.get(2).unwrap_or("").to_string(),
            maximum_load: row.get(3).unwrap_or("").to_string(),
        });
    }
    Ok(records)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in HEADER {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Write a record file with the standard header. Returns the number
/// of data rows written.
pub fn write_records(path: &Path, records: &[RawRecord]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn raw(id: &str, engine: &str, fuel: &str, load: &str) -> RawRecord {
        RawRecord {
            vehicle_id: id.to_string(),
            engine_capacity: engine.to_string(),
            fuel_consumption: fuel.to_string(),
            maximum_load: load.to_string(),
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let records = vec![raw("1", "400", "60", "20"), raw("2b", "3.5", "50", "25kg")];

        let written = write_records(&path, &records).unwrap();
        assert_eq!(written, 2);

        let read_back = read_records(&path).unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn test_missing_column_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "vehicle_id,engine_capacity,fuel_consumption\n1,2,3\n").unwrap();

        let err = read_records(&path).unwrap_err();
        match err {
            Error::MissingColumn(column) => assert_eq!(column, "maximum_load"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fields_survive_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        std::fs::write(
            &path,
            "vehicle_id,engine_capacity,fuel_consumption,maximum_load\n007, 250,1_6,no digits\n",
        )
        .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records[0].vehicle_id, "007");
        assert_eq!(records[0].engine_capacity, " 250");
        assert_eq!(records[0].maximum_load, "no digits");
    }
}
