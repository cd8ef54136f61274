use crate::model::network::EdgeId;
use serde::{Deserialize, Serialize};

/// summary of the best path found to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    /// edges in traversal order, origin first
    pub edges: Vec<EdgeId>,
    /// combined traversal seconds along those edges
    pub total_seconds: u32,
}

/// per-destination best-path summaries, aligned with the destination
/// enumeration; `None` where no path was found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathResult {
    summaries: Vec<Option<PathSummary>>,
}

impl PathResult {
    pub fn new(summaries: Vec<Option<PathSummary>>) -> PathResult {
        PathResult { summaries }
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&PathSummary> {
        self.summaries.get(i).and_then(|summary| summary.as_ref())
    }

    pub fn summaries(&self) -> &[Option<PathSummary>] {
        &self.summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_by_destination() {
        let result = PathResult::new(vec![
            Some(PathSummary {
                edges: vec![EdgeId(0), EdgeId(1)],
                total_seconds: 25,
            }),
            None,
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(0).map(|s| s.total_seconds), Some(25));
        assert!(result.get(1).is_none());
        assert!(result.get(2).is_none());
    }
}
