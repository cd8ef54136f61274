use super::{CostFieldError, CostObservations};
use crate::model::network::{Edge, WayId};

/// a pluggable secondary cost contributor layered on base edge-traversal
/// time. zero or more fields attach to a network's edge store; during a
/// search the traversal-time calculator asks every attached field for its
/// addition on every traversed edge and sums the results on top of the
/// base time (see [`crate::model::compute::edge_traversal_seconds`]).
///
/// implementations must be immutable after construction: one field instance
/// may serve many concurrent searches. all per-query mutable state lives in
/// the [`CostObservations`] accumulator owned by the calling query.
pub trait CostField: Send + Sync {
    /// cost seconds this field adds on top of the base traversal time for
    /// one edge. evaluated once per traversed edge during a search.
    ///
    /// the returned value is signed: a negative sensitivity coefficient
    /// produces negative additions. the 1-second floor is applied by the
    /// caller to the summed total, not to each field's contribution.
    fn additional_seconds(
        &self,
        edge: &Edge,
        base_seconds: u32,
        observations: &mut CostObservations,
    ) -> Result<i64, CostFieldError>;

    /// free-text label for this field, used in logs and reporting only.
    fn display_key(&self) -> &str;

    /// the configured per-way value backing this field, for reporting.
    fn display_value(&self, way_id: WayId) -> Option<f64>;
}
