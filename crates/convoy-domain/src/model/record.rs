//! Vehicle record type definitions
//!
//! Records pass through the pipeline in two forms: `RawRecord` keeps
//! every field as the text read from the source file so malformed
//! values survive for the cleaning audit, and `Vehicle` is the parsed
//! integer form that goes into the store.

use convoy_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column names, in file and table order.
pub const HEADER: [&str; 4] = [
    "vehicle_id",
    "engine_capacity",
    "fuel_consumption",
    "maximum_load",
];

/// One row of the source file, fields held as raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub vehicle_id: String,
    pub engine_capacity: String,
    pub fuel_consumption: String,
    pub maximum_load: String,
}

impl RawRecord {
    /// Field values in column order
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.vehicle_id,
            &self.engine_capacity,
            &self.fuel_consumption,
            &self.maximum_load,
        ]
    }

    /// Parse the cleaned text fields into integers.
    ///
    /// `row` is the 1-based source line (header is line 1) used in
    /// diagnostics. Leading zeros are lost by integer typing:
    /// `"007"` parses to `7`.
    pub fn to_vehicle(&self, row: usize) -> Result<Vehicle> {
        Ok(Vehicle {
            vehicle_id: parse_field(&self.vehicle_id, row, HEADER[0])?,
            engine_capacity: parse_field(&self.engine_capacity, row, HEADER[1])?,
            fuel_consumption: parse_field(&self.fuel_consumption, row, HEADER[2])?,
            maximum_load: parse_field(&self.maximum_load, row, HEADER[3])?,
            score: None,
        })
    }
}

fn parse_field(value: &str, row: usize, column: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| Error::InvalidField {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// A parsed vehicle record. The score is populated by the scoring
/// service and is never serialized into the export views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub engine_capacity: i64,
    pub fuel_consumption: i64,
    pub maximum_load: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
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
    fn test_parse_clean_record() {
        let vehicle = raw("1", "400", "60", "20").to_vehicle(2).unwrap();
        assert_eq!(vehicle.vehicle_id, 1);
        assert_eq!(vehicle.engine_capacity, 400);
        assert_eq!(vehicle.fuel_consumption, 60);
        assert_eq!(vehicle.maximum_load, 20);
        assert!(vehicle.score.is_none());
    }

    #[test]
    fn test_parse_drops_leading_zeros() {
        let vehicle = raw("007", "400", "60", "20").to_vehicle(2).unwrap();
        assert_eq!(vehicle.vehicle_id, 7);
    }

    #[test]
    fn test_parse_empty_field_is_error() {
        let err = raw("1", "", "60", "20").to_vehicle(3).unwrap_err();
        match err {
            Error::InvalidField { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, "engine_capacity");
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fields_are_in_column_order() {
        let record = raw("1", "2", "3", "4");
        assert_eq!(record.fields(), ["1", "2", "3", "4"]);
    }
}
