use super::{EdgeId, NetworkError, StreetClass, WayId};
use crate::model::cost::CostField;
use itertools::Itertools;
use std::sync::Arc;

/// one directed edge row of the street network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub edge_id: EdgeId,
    /// the way this edge was split from; shared by every edge of the way.
    pub way_id: WayId,
    pub street_class: StreetClass,
    pub from_vertex: usize,
    pub to_vertex: usize,
    /// base traversal time assigned by network loading, whole seconds.
    pub base_seconds: u32,
}

/// the directed edges of a street network plus the cost fields attached to
/// it. edges are append-only and addressed by a stable [`EdgeId`].
#[derive(Default)]
pub struct EdgeStore {
    edges: Vec<Edge>,
    /// secondary cost overlays attached to this network. an empty list
    /// means base traversal time is the only cost.
    pub cost_fields: Vec<Arc<dyn CostField>>,
}

impl EdgeStore {
    pub fn new() -> EdgeStore {
        EdgeStore::default()
    }

    /// appends an edge row.
    ///
    /// # Returns
    ///
    /// * the id of the new edge
    pub fn add_edge(
        &mut self,
        way_id: WayId,
        street_class: StreetClass,
        from_vertex: usize,
        to_vertex: usize,
        base_seconds: u32,
    ) -> EdgeId {
        let edge_id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            edge_id,
            way_id,
            street_class,
            from_vertex,
            to_vertex,
            base_seconds,
        });
        edge_id
    }

    pub fn get(&self, edge_id: EdgeId) -> Result<&Edge, NetworkError> {
        self.edges
            .get(edge_id.0)
            .ok_or(NetworkError::EdgeIndexOutOfBounds {
                index: edge_id.0,
                count: self.edges.len(),
            })
    }

    pub fn way_id(&self, edge_id: EdgeId) -> Result<WayId, NetworkError> {
        Ok(self.get(edge_id)?.way_id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// distinct way ids present in this store, in first-appearance order.
    pub fn unique_way_ids(&self) -> Vec<WayId> {
        self.edges.iter().map(|e| e.way_id).unique().collect()
    }

    /// true when at least one cost field is attached to this network.
    pub fn has_cost_fields(&self) -> bool {
        !self.cost_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut store = EdgeStore::new();
        let e0 = store.add_edge(WayId(10), StreetClass::Primary, 0, 1, 12);
        let e1 = store.add_edge(WayId(10), StreetClass::Primary, 1, 2, 8);
        assert_eq!(e0, EdgeId(0));
        assert_eq!(e1, EdgeId(1));
        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.get(e1).unwrap().base_seconds, 8);
        assert_eq!(store.way_id(e0).unwrap(), WayId(10));
        assert!(matches!(
            store.get(EdgeId(5)),
            Err(NetworkError::EdgeIndexOutOfBounds { index: 5, count: 2 })
        ));
    }

    #[test]
    fn test_unique_way_ids_preserve_first_appearance() {
        let mut store = EdgeStore::new();
        store.add_edge(WayId(30), StreetClass::Other, 0, 1, 5);
        store.add_edge(WayId(10), StreetClass::Other, 1, 2, 5);
        store.add_edge(WayId(30), StreetClass::Other, 2, 3, 5);
        assert_eq!(store.unique_way_ids(), vec![WayId(30), WayId(10)]);
    }
}
