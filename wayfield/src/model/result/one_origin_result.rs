use super::{AccessibilityResult, PathResult, TemporalDensityResult, TravelTimeResult};
use crate::model::network::WayId;
use serde::{Deserialize, Serialize};

/// the single return type for everything one travel-time computation can
/// produce for one origin point: travel times to the destination point
/// set, accessibility indicator values, best-path summaries, and — when
/// cost fields were attached to the network — the way-id provenance needed
/// to reconcile per-way cost factors with the routed paths.
///
/// built once per query and never mutated after. wire serialization is the
/// external worker layer's concern; this is the typed boundary object it
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneOriginResult {
    pub travel_times: TravelTimeResult,
    pub accessibility: AccessibilityResult,
    pub paths: Option<PathResult>,
    /// way ids traversed per destination; `None` when no cost field was
    /// attached or no way ids were recovered
    pub way_id_results: Option<Vec<Vec<WayId>>>,
    pub temporal_density: Option<TemporalDensityResult>,
}

impl OneOriginResult {
    pub fn new(
        travel_times: TravelTimeResult,
        accessibility: AccessibilityResult,
        paths: Option<PathResult>,
        way_id_results: Option<Vec<Vec<WayId>>>,
        temporal_density: Option<TemporalDensityResult>,
    ) -> OneOriginResult {
        OneOriginResult {
            travel_times,
            accessibility,
            paths,
            way_id_results,
            temporal_density,
        }
    }
}
