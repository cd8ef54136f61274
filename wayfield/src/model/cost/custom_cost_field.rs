use super::{CostField, CostFieldError, CostObservations};
use crate::model::network::{Edge, WayId};
use std::collections::HashMap;

/// multiplicative per-way cost overlay: for each traversed edge the
/// addition is `round(base_seconds × factor[way_id] × sensitivity)` cost
/// seconds. factors are computed upstream (e.g. sampled from an exposure
/// raster along each way) and keyed by way id.
///
/// in strict mode (the default) a traversed way id missing from the factor
/// mapping fails the whole query; with `allow_missing_factors` a missing
/// factor contributes zero addition instead, for callers accepting partial
/// coverage of the network.
#[derive(Debug, Clone)]
pub struct CustomCostField {
    display_key: String,
    sensitivity_coefficient: f64,
    factors: HashMap<WayId, f64>,
    allow_missing_factors: bool,
}

impl CustomCostField {
    /// builds a custom cost field over a non-empty factor mapping.
    ///
    /// # Arguments
    ///
    /// * `display_key` - free-text label for logs and reporting
    /// * `sensitivity_coefficient` - signed weight applied to every factor;
    ///   negative values derive routes that favor high-factor ways. the
    ///   traversal-time calculator floors each edge's summed total at 1
    ///   second, so negative additions never produce non-positive times
    /// * `factors` - way id to non-negative multiplier, must be non-empty
    /// * `allow_missing_factors` - missing-key behavior: `false` fails the
    ///   query on a way id absent from `factors`, `true` treats it as zero
    ///
    /// # Returns
    ///
    /// * the field, or a configuration error describing the invalid mapping
    pub fn new(
        display_key: &str,
        sensitivity_coefficient: f64,
        factors: HashMap<WayId, f64>,
        allow_missing_factors: bool,
    ) -> Result<CustomCostField, CostFieldError> {
        if factors.is_empty() {
            return Err(CostFieldError::EmptyFactorMapping);
        }
        for (way_id, factor) in factors.iter() {
            if factor.is_nan() || *factor < 0.0 {
                return Err(CostFieldError::InvalidFactor {
                    way_id: *way_id,
                    factor: *factor,
                });
            }
        }
        Ok(CustomCostField {
            display_key: display_key.to_string(),
            sensitivity_coefficient,
            factors,
            allow_missing_factors,
        })
    }

    pub fn sensitivity_coefficient(&self) -> f64 {
        self.sensitivity_coefficient
    }

    pub fn factors(&self) -> &HashMap<WayId, f64> {
        &self.factors
    }

    pub fn allow_missing_factors(&self) -> bool {
        self.allow_missing_factors
    }
}

impl CostField for CustomCostField {
    fn additional_seconds(
        &self,
        edge: &Edge,
        base_seconds: u32,
        observations: &mut CostObservations,
    ) -> Result<i64, CostFieldError> {
        let way_id = edge.way_id;
        // the base time is observed even when the factor lookup fails below
        observations.record_base(way_id, base_seconds);
        let factor = match self.factors.get(&way_id) {
            Some(factor) => *factor,
            None if self.allow_missing_factors => {
                observations.record_additional(way_id, 0);
                return Ok(0);
            }
            None => return Err(CostFieldError::MissingFactor { way_id }),
        };
        let additional = base_seconds as f64 * factor * self.sensitivity_coefficient;
        if !additional.is_finite() {
            return Err(CostFieldError::NonFiniteAddition { way_id });
        }
        let rounded = additional.round() as i64;
        observations.record_additional(way_id, rounded);
        Ok(rounded)
    }

    fn display_key(&self) -> &str {
        &self.display_key
    }

    fn display_value(&self, way_id: WayId) -> Option<f64> {
        self.factors.get(&way_id).copied()
    }
}
