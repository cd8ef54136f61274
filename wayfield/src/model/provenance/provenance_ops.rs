use super::RoutingStateSource;
use crate::model::network::{EdgeStore, NetworkError, WayId};
use crate::model::pointset::PointSetTimes;
use itertools::Itertools;
use rayon::prelude::*;

/// recovers the way ids traversed by each destination's best path, for
/// reconciling externally computed per-way cost factors with the routed
/// paths. one entry per destination, aligned with the destination
/// enumeration; each entry holds the path's way ids in first-appearance
/// order with duplicates collapsed.
///
/// a destination the router did not reach yields an empty entry, not an
/// error. when every entry comes back empty the whole result is reported
/// absent (`None`), so downstream consumers can distinguish "not computed"
/// from "computed but trivial".
///
/// # Arguments
///
/// * `destination_times` - non-transit travel times aligned with the
///   destination point set
/// * `router` - the external router holding this query's search state
/// * `edges` - the network's edge store
///
/// # Returns
///
/// * per-destination way-id sequences, `None` if none were found
pub fn way_ids_from_router_state(
    destination_times: &PointSetTimes,
    router: &dyn RoutingStateSource,
    edges: &EdgeStore,
) -> Result<Option<Vec<Vec<WayId>>>, NetworkError> {
    let point_set = destination_times.point_set();
    let results: Vec<Vec<WayId>> = (0..destination_times.len())
        .into_par_iter()
        .map(|i| way_ids_for_destination(point_set.lat(i), point_set.lon(i), router, edges))
        .collect::<Result<_, _>>()?;
    if results.iter().all(|way_ids| way_ids.is_empty()) {
        log::info!("no way ids were found for any destination point");
        return Ok(None);
    }
    Ok(Some(results))
}

/// way ids along one destination's best path, in first-appearance order
/// with duplicates collapsed. empty when the router has no state for the
/// destination's coordinates.
fn way_ids_for_destination(
    lat: f64,
    lon: f64,
    router: &dyn RoutingStateSource,
    edges: &EdgeStore,
) -> Result<Vec<WayId>, NetworkError> {
    let state = match router.terminal_state(lat, lon) {
        Some(state) => state,
        None => return Ok(Vec::new()),
    };
    let way_ids: Vec<WayId> = state
        .edges()
        .iter()
        .map(|edge_id| edges.way_id(*edge_id))
        .collect::<Result<_, _>>()?;
    Ok(way_ids.into_iter().unique().collect())
}
