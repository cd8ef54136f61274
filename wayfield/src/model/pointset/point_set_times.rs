use super::{PointSet, PointSetError};
use std::sync::Arc;

/// travel-time value marking a destination the search did not reach.
pub const UNREACHED: i32 = i32::MAX;

/// per-destination non-transit travel times aligned 1:1 with the point set
/// they were computed against.
#[derive(Clone)]
pub struct PointSetTimes {
    point_set: Arc<dyn PointSet>,
    travel_times: Vec<i32>,
}

impl PointSetTimes {
    pub fn new(
        point_set: Arc<dyn PointSet>,
        travel_times: Vec<i32>,
    ) -> Result<PointSetTimes, PointSetError> {
        if point_set.len() != travel_times.len() {
            return Err(PointSetError::TravelTimeLengthMismatch {
                points: point_set.len(),
                times: travel_times.len(),
            });
        }
        Ok(PointSetTimes {
            point_set,
            travel_times,
        })
    }

    pub fn len(&self) -> usize {
        self.travel_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel_times.is_empty()
    }

    pub fn point_set(&self) -> &dyn PointSet {
        self.point_set.as_ref()
    }

    pub fn travel_times(&self) -> &[i32] {
        &self.travel_times
    }

    /// travel time in whole seconds to destination `i`, [`UNREACHED`] if
    /// the search did not reach it.
    pub fn time(&self, i: usize) -> i32 {
        self.travel_times[i]
    }
}
