use crate::model::pointset::{PointSetTimes, UNREACHED};
use serde::{Deserialize, Serialize};

/// opportunity sums reachable within each travel-time cutoff — the
/// accessibility indicator values for one origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityResult {
    cutoffs_seconds: Vec<u32>,
    values: Vec<f64>,
}

impl AccessibilityResult {
    /// reduces a travel-time vector against its point set's opportunity
    /// weights: a destination counts toward every cutoff at or above its
    /// travel time.
    pub fn from_travel_times(
        times: &PointSetTimes,
        cutoffs_seconds: Vec<u32>,
    ) -> AccessibilityResult {
        let values = cutoffs_seconds
            .iter()
            .map(|cutoff| {
                (0..times.len())
                    .filter(|i| {
                        let t = times.time(*i);
                        t != UNREACHED && t as i64 <= *cutoff as i64
                    })
                    .map(|i| times.point_set().opportunity_count(i))
                    .sum()
            })
            .collect();
        AccessibilityResult {
            cutoffs_seconds,
            values,
        }
    }

    pub fn cutoffs_seconds(&self) -> &[u32] {
        &self.cutoffs_seconds
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// the indicator value for the cutoff at `index`.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}
