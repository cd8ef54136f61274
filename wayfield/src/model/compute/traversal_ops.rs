use super::TraversalError;
use crate::model::congestion::{CongestionLevel, CrossingPenaltyTable, StreetClassification};
use crate::model::cost::{CostField, CostFieldError, CostObservations};
use crate::model::network::{Edge, EdgeId, EdgeStore, NetworkError, VertexFlag, VertexStore};
use std::sync::Arc;

/// floor applied to an edge's combined traversal seconds whenever at least
/// one cost field is attached. negative additions could otherwise drive
/// the total to zero or below, which the search cannot admit.
pub const MIN_TRAVERSAL_SECONDS: u32 = 1;

/// combined traversal seconds for one edge: the base time plus every
/// attached field's addition, floored at [`MIN_TRAVERSAL_SECONDS`]. with
/// no fields attached the base time passes through unchanged.
///
/// # Arguments
///
/// * `edge` - the edge being traversed
/// * `base_seconds` - base traversal time computed by the external
///   calculator for this traversal
/// * `fields` - the cost fields attached to the network
/// * `observations` - the query's evaluation accumulator
///
/// # Returns
///
/// * combined whole seconds, or the first field error raised
pub fn edge_traversal_seconds(
    edge: &Edge,
    base_seconds: u32,
    fields: &[Arc<dyn CostField>],
    observations: &mut CostObservations,
) -> Result<u32, CostFieldError> {
    if fields.is_empty() {
        return Ok(base_seconds);
    }
    let mut total = base_seconds as i64;
    for field in fields {
        total += field.additional_seconds(edge, base_seconds, observations)?;
    }
    Ok(total.clamp(MIN_TRAVERSAL_SECONDS as i64, u32::MAX as i64) as u32)
}

/// folds [`edge_traversal_seconds`] over the edge sequence of one path,
/// reading base times and attached fields from the edge store. an empty
/// sequence is zero seconds.
pub fn path_traversal_seconds(
    path: &[EdgeId],
    edges: &EdgeStore,
    observations: &mut CostObservations,
) -> Result<u32, TraversalError> {
    let mut total: u32 = 0;
    for edge_id in path {
        let edge = edges.get(*edge_id)?;
        let seconds = edge_traversal_seconds(
            edge,
            edge.base_seconds,
            &edges.cost_fields,
            observations,
        )?;
        total = total.saturating_add(seconds);
    }
    Ok(total)
}

/// the intersection delay paid on arriving at the edge's target vertex:
/// the crossing-penalty table value for the prevailing congestion level
/// and the edge's street classification when that vertex carries a traffic
/// signal, zero otherwise.
pub fn crossing_delay_seconds(
    table: &CrossingPenaltyTable,
    level: CongestionLevel,
    edge: &Edge,
    vertices: &VertexStore,
) -> Result<u32, NetworkError> {
    if vertices.flag(edge.to_vertex, VertexFlag::TrafficSignal)? {
        Ok(table.delay(
            level,
            StreetClassification::from_street_class(edge.street_class),
        ))
    } else {
        Ok(0)
    }
}
