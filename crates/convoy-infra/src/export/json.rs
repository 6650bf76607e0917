//! JSON report exporter
//!
//! Serializes the convoy as an object with a single `convoy` key
//! holding one object per row. Numeric fields stay JSON numbers.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use convoy_domain::model::Vehicle;
use convoy_types::Result;

#[derive(Serialize)]
struct ConvoyDocument<'a> {
    convoy: &'a [Vehicle],
}

/// Write the JSON report. Returns the number of exported rows.
pub fn write_json(path: &Path, vehicles: &[Vehicle]) -> Result<usize> {
    let file = File::create(path)?;
    serde_json::to_writer(file, &ConvoyDocument { convoy: vehicles })?;
    Ok(vehicles.len())
}
