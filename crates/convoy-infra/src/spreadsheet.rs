//! Spreadsheet-to-CSV conversion
//!
//! Reads the named worksheet and writes the intermediate CSV with
//! the standard header. Cells are captured as raw text so malformed
//! values survive for the cleaning audit; integer-valued floats
//! render without a trailing `.0`.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

use convoy_domain::model::{RawRecord, HEADER};
use convoy_types::{Error, Result};

use crate::records_csv;

/// Convert one worksheet to the intermediate CSV. Returns the number
/// of data rows written.
pub fn convert_to_csv(input: &Path, csv_out: &Path, sheet: &str) -> Result<usize> {
    let records = read_sheet(input, sheet)?;
    debug!("read {} rows from sheet {:?}", records.len(), sheet);
    records_csv::write_records(csv_out, &records)
}

fn read_sheet(input: &Path, sheet: &str) -> Result<Vec<RawRecord>> {
    let mut workbook: Xlsx<_> =
        open_workbook(input).map_err(|e: calamine::XlsxError| Error::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| Error::Spreadsheet(format!("sheet {sheet:?}: {e}")))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| Error::Spreadsheet(format!("sheet {sheet:?} is empty")))?;
    validate_header(header)?;

    Ok(rows
        .map(|row| RawRecord {
            vehicle_id: cell_text(row.first()),
            engine_capacity: cell_text(row.get(1)),
            fuel_consumption: cell_text(row.get(2)),
            maximum_load: cell_text(row.get(3)),
        })
        .collect())
}

fn validate_header(header: &[Data]) -> Result<()> {
    for column in HEADER {
        if !header.iter().any(|cell| cell_text(Some(cell)).trim() == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) if f.fract() == 0.0 => (*f as i64).to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(other) => other.to_string(),
    }
}
