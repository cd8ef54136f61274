use super::ResultError;
use serde::{Deserialize, Serialize};

/// travel times from one origin to every destination in whole seconds, one
/// row per requested percentile of travel time. unreached destinations
/// hold [`crate::model::pointset::UNREACHED`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTimeResult {
    values: Vec<Vec<i32>>,
    n_points: usize,
}

impl TravelTimeResult {
    /// builds a travel time matrix, validating that every percentile row
    /// covers the same destinations.
    pub fn new(values: Vec<Vec<i32>>) -> Result<TravelTimeResult, ResultError> {
        let n_points = values.first().map_or(0, |row| row.len());
        for (percentile, row) in values.iter().enumerate() {
            if row.len() != n_points {
                return Err(ResultError::RaggedTravelTimeMatrix {
                    percentile,
                    expected: n_points,
                    found: row.len(),
                });
            }
        }
        Ok(TravelTimeResult { values, n_points })
    }

    /// a single-percentile matrix, the common non-transit case.
    pub fn from_single(times: Vec<i32>) -> TravelTimeResult {
        let n_points = times.len();
        TravelTimeResult {
            values: vec![times],
            n_points,
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn n_percentiles(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Vec<i32>] {
        &self.values
    }

    pub fn percentile(&self, p: usize) -> Option<&[i32]> {
        self.values.get(p).map(|row| row.as_slice())
    }
}
