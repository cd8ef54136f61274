use crate::model::pointset::{PointSetTimes, UNREACHED};
use serde::{Deserialize, Serialize};

/// opportunities first reached within each one-minute bin — the temporal
/// density view of one origin's travel times, from which dual
/// accessibility measures are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalDensityResult {
    densities: Vec<f64>,
}

impl TemporalDensityResult {
    /// bins each destination's opportunity weight at the minute its travel
    /// time falls in. destinations beyond `n_minutes` or unreached do not
    /// contribute.
    pub fn from_travel_times(times: &PointSetTimes, n_minutes: usize) -> TemporalDensityResult {
        let mut densities = vec![0.0; n_minutes];
        for i in 0..times.len() {
            let t = times.time(i);
            if t == UNREACHED || t < 0 {
                continue;
            }
            let minute = t as usize / 60;
            if minute < n_minutes {
                densities[minute] += times.point_set().opportunity_count(i);
            }
        }
        TemporalDensityResult { densities }
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn n_minutes(&self) -> usize {
        self.densities.len()
    }
}
