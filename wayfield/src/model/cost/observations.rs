use crate::model::network::WayId;
use std::collections::HashMap;

/// per-query accumulator of cost-field evaluations, for inspection after a
/// computation completes. the query owns one of these and threads it
/// through every edge evaluation; cost fields themselves stay immutable, so
/// one field instance can serve many concurrent searches, each with its own
/// accumulator.
///
/// entries are keyed by way id; when several edges of one way are
/// traversed, the last evaluation wins.
#[derive(Debug, Default, Clone)]
pub struct CostObservations {
    base_seconds: HashMap<WayId, u32>,
    additional_seconds: HashMap<WayId, i64>,
}

impl CostObservations {
    pub fn new() -> CostObservations {
        CostObservations::default()
    }

    /// records the base traversal seconds queried for a way.
    pub fn record_base(&mut self, way_id: WayId, base_seconds: u32) {
        self.base_seconds.insert(way_id, base_seconds);
    }

    /// records the cost seconds a field added for a way.
    pub fn record_additional(&mut self, way_id: WayId, additional_seconds: i64) {
        self.additional_seconds.insert(way_id, additional_seconds);
    }

    /// base traversal seconds observed per way id.
    pub fn base_seconds(&self) -> &HashMap<WayId, u32> {
        &self.base_seconds
    }

    /// additional cost seconds observed per way id.
    pub fn additional_seconds(&self) -> &HashMap<WayId, i64> {
        &self.additional_seconds
    }

    pub fn is_empty(&self) -> bool {
        self.base_seconds.is_empty() && self.additional_seconds.is_empty()
    }
}
