//! Repository trait definitions for the convoy store

use convoy_types::Result;

use crate::model::Vehicle;

/// Row filter for reading the store back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFilter {
    /// Every row
    All,
    /// Rows with a score strictly greater than the threshold
    Above(i64),
    /// Rows with a score less than or equal to the threshold
    AtMost(i64),
}

/// Repository for the `convoy` table
pub trait ConvoyRepository {
    /// Create the table if it does not exist yet
    fn create_table(&self) -> Result<()>;

    /// Append a record set as new rows; all rows go in one
    /// transaction, so a duplicate `vehicle_id` fails the whole batch.
    /// Returns the number of rows inserted.
    fn append(&mut self, vehicles: &[Vehicle]) -> Result<usize>;

    /// Read rows back in natural table order
    fn fetch(&self, filter: ScoreFilter) -> Result<Vec<Vehicle>>;
}
