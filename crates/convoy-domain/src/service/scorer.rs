//! Convoy fitness scoring service
//!
//! Scores each vehicle 1..=6 from three sub-scores:
//! - pit stops on a 450 km route: `floor(4.5 * fuel_consumption /
//!   engine_capacity)`; 2 points for zero stops, 1 for a single stop
//! - fuel burned over the route: `4.5 * fuel_consumption` litres;
//!   2 points at 230 or less, otherwise 1
//! - capacity: 2 points for a maximum load of 20 tonnes or more

use convoy_types::{Error, Result};

use crate::model::Vehicle;

/// Compute the fitness score for one vehicle. The fields must already
/// be clean integers; a zero engine capacity makes the pit-stop
/// quotient undefined and is reported as an error.
pub fn score_vehicle(vehicle: &Vehicle) -> Result<i64> {
    if vehicle.engine_capacity == 0 {
        return Err(Error::ZeroEngineCapacity {
            vehicle_id: vehicle.vehicle_id,
        });
    }

    // The product is taken before the division, and the quotient is
    // floored toward negative infinity.
    let pitstops =
        (4.5 * vehicle.fuel_consumption as f64 / vehicle.engine_capacity as f64).floor();
    let fuel_burned = 4.5 * vehicle.fuel_consumption as f64;

    let mut score = 0;
    score += if pitstops == 0.0 {
        2
    } else if pitstops == 1.0 {
        1
    } else {
        0
    };
    score += if fuel_burned <= 230.0 { 2 } else { 1 };
    if vehicle.maximum_load >= 20 {
        score += 2;
    }
    Ok(score)
}

/// Score every vehicle in place. Fails on the first vehicle whose
/// score is undefined.
pub fn apply_scores(vehicles: &mut [Vehicle]) -> Result<()> {
    for vehicle in vehicles.iter_mut() {
        vehicle.score = Some(score_vehicle(vehicle)?);
    }
    Ok(())
}
