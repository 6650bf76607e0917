//! SQLite implementation of `ConvoyRepository`
//!
//! One connection per unit of work: the pipeline opens the store,
//! uses it for a single stage, and drops it before the next stage.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use convoy_domain::model::Vehicle;
use convoy_domain::repository::{ConvoyRepository, ScoreFilter};
use convoy_types::{Error, Result};

const CREATE_PLAIN: &str = "CREATE TABLE IF NOT EXISTS convoy (
    vehicle_id INT NOT NULL PRIMARY KEY,
    engine_capacity INT NOT NULL,
    fuel_consumption INT NOT NULL,
    maximum_load INT NOT NULL
);";

const CREATE_SCORED: &str = "CREATE TABLE IF NOT EXISTS convoy (
    vehicle_id INT NOT NULL PRIMARY KEY,
    engine_capacity INT NOT NULL,
    fuel_consumption INT NOT NULL,
    maximum_load INT NOT NULL,
    score INT NOT NULL
);";

// Exports never include the score column, in either mode.
const SELECT_COLUMNS: &str =
    "SELECT vehicle_id, engine_capacity, fuel_consumption, maximum_load FROM convoy";

/// SQLite-backed convoy store
pub struct SqliteConvoyRepository {
    conn: Connection,
    scoring: bool,
}

impl SqliteConvoyRepository {
    /// Open (or create) the store file. `scoring` selects the table
    /// schema with the score column.
    pub fn open(path: &Path, scoring: bool) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn, scoring })
    }
}

impl ConvoyRepository for SqliteConvoyRepository {
    fn create_table(&self) -> Result<()> {
        let schema = if self.scoring {
            CREATE_SCORED
        } else {
            CREATE_PLAIN
        };
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn append(&mut self, vehicles: &[Vehicle]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        if self.scoring {
            let mut stmt = tx.prepare(
                "INSERT INTO convoy (vehicle_id, engine_capacity, fuel_consumption, maximum_load, score)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for vehicle in vehicles {
                let score = vehicle.score.ok_or(Error::MissingScore {
                    vehicle_id: vehicle.vehicle_id,
                })?;
                stmt.execute(params![
                    vehicle.vehicle_id,
                    vehicle.engine_capacity,
                    vehicle.fuel_consumption,
                    vehicle.maximum_load,
                    score,
                ])?;
            }
            drop(stmt);
        } else {
            let mut stmt = tx.prepare(
                "INSERT INTO convoy (vehicle_id, engine_capacity, fuel_consumption, maximum_load)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for vehicle in vehicles {
                stmt.execute(params![
                    vehicle.vehicle_id,
                    vehicle.engine_capacity,
                    vehicle.fuel_consumption,
                    vehicle.maximum_load,
                ])?;
            }
            drop(stmt);
        }
        tx.commit()?;
        debug!("inserted {} rows into convoy", vehicles.len());
        Ok(vehicles.len())
    }

    fn fetch(&self, filter: ScoreFilter) -> Result<Vec<Vehicle>> {
        let (sql, bound): (String, Vec<i64>) = match filter {
            ScoreFilter::All => (SELECT_COLUMNS.to_string(), Vec::new()),
            ScoreFilter::Above(threshold) => {
                (format!("{SELECT_COLUMNS} WHERE score > ?1"), vec![threshold])
            }
            ScoreFilter::AtMost(threshold) => {
                (format!("{SELECT_COLUMNS} WHERE score <= ?1"), vec![threshold])
            }
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(bound), |row| {
            Ok(Vehicle {
                vehicle_id: row.get(0)?,
                engine_capacity: row.get(1)?,
                fuel_consumption: row.get(2)?,
                maximum_load: row.get(3)?,
                score: None,
            })
        })?;

        let mut vehicles = Vec::new();
        for row in rows {
            vehicles.push(row?);
        }
        Ok(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn vehicle(id: i64, engine: i64, fuel: i64, load: i64, score: Option<i64>) -> Vehicle {
        Vehicle {
            vehicle_id: id,
            engine_capacity: engine,
            fuel_consumption: fuel,
            maximum_load: load,
            score,
        }
    }

    #[test]
    fn test_append_and_fetch_all() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convoy.s3db");
        let mut repo = SqliteConvoyRepository::open(&path, false).unwrap();
        repo.create_table().unwrap();

        let inserted = repo
            .append(&[
                vehicle(7, 400, 60, 20, None),
                vehicle(2, 300, 50, 25, None),
            ])
            .unwrap();
        assert_eq!(inserted, 2);

        let rows = repo.fetch(ScoreFilter::All).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].vehicle_id, 7);
        assert_eq!(rows[1].maximum_load, 25);
        assert!(rows[0].score.is_none());
    }

    #[test]
    fn test_create_table_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convoy.s3db");
        let repo = SqliteConvoyRepository::open(&path, true).unwrap();
        repo.create_table().unwrap();
        repo.create_table().unwrap();
    }

    #[test]
    fn test_duplicate_vehicle_id_fails_the_batch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convoy.s3db");
        let mut repo = SqliteConvoyRepository::open(&path, false).unwrap();
        repo.create_table().unwrap();
        repo.append(&[vehicle(1, 400, 60, 20, None)]).unwrap();

        let err = repo
            .append(&[vehicle(9, 100, 10, 10, None), vehicle(1, 400, 60, 20, None)])
            .unwrap_err();
        assert!(matches!(err, Error::Database(_)), "{err}");

        // The failed batch must not leave a partial insert behind.
        let rows = repo.fetch(ScoreFilter::All).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_score_filters_partition_the_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convoy.s3db");
        let mut repo = SqliteConvoyRepository::open(&path, true).unwrap();
        repo.create_table().unwrap();
        repo.append(&[
            vehicle(1, 10, 30, 10, Some(2)),
            vehicle(2, 500, 50, 10, Some(4)),
            vehicle(3, 1000, 60, 20, Some(5)),
        ])
        .unwrap();

        let fit: Vec<i64> = repo
            .fetch(ScoreFilter::Above(3))
            .unwrap()
            .iter()
            .map(|v| v.vehicle_id)
            .collect();
        assert_eq!(fit, vec![2, 3]);

        let unfit: Vec<i64> = repo
            .fetch(ScoreFilter::AtMost(3))
            .unwrap()
            .iter()
            .map(|v| v.vehicle_id)
            .collect();
        assert_eq!(unfit, vec![1]);
    }

    #[test]
    fn test_missing_score_in_scoring_mode_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("convoy.s3db");
        let mut repo = SqliteConvoyRepository::open(&path, true).unwrap();
        repo.create_table().unwrap();

        let err = repo.append(&[vehicle(1, 400, 60, 20, None)]).unwrap_err();
        assert!(matches!(err, Error::MissingScore { vehicle_id: 1 }), "{err}");
    }
}
