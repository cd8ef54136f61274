use super::{PointSet, PointSetError};
use crate::model::network::vertex_store;
use geo::{Point, Rect};

/// point set backed by parallel point and weight vectors, for freeform
/// (non-gridded) destination sets.
#[derive(Debug, Clone, Default)]
pub struct FreeFormPointSet {
    points: Vec<Point<f64>>,
    weights: Vec<f64>,
}

impl FreeFormPointSet {
    pub fn new(
        points: Vec<Point<f64>>,
        weights: Vec<f64>,
    ) -> Result<FreeFormPointSet, PointSetError> {
        if points.len() != weights.len() {
            return Err(PointSetError::LengthMismatch {
                points: points.len(),
                weights: weights.len(),
            });
        }
        Ok(FreeFormPointSet { points, weights })
    }

    /// a point set where every destination carries the same opportunity
    /// weight.
    pub fn with_uniform_weight(points: Vec<Point<f64>>, weight: f64) -> FreeFormPointSet {
        let weights = vec![weight; points.len()];
        FreeFormPointSet { points, weights }
    }

    /// indices of all points inside an envelope given in fixed degrees.
    /// point coordinates are truncated to fixed-point resolution before the
    /// containment check, matching how the vertex columns store them.
    pub fn points_in_envelope(&self, fixed_envelope: &Rect<f64>) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, point)| {
                let x = vertex_store::floating_degrees_to_fixed(point.x()) as f64;
                let y = vertex_store::floating_degrees_to_fixed(point.y()) as f64;
                fixed_envelope.min().x <= x
                    && x <= fixed_envelope.max().x
                    && fixed_envelope.min().y <= y
                    && y <= fixed_envelope.max().y
            })
            .map(|(i, _)| i)
            .collect()
    }
}

impl PointSet for FreeFormPointSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn lat(&self, i: usize) -> f64 {
        self.points[i].y()
    }

    fn lon(&self, i: usize) -> f64 {
        self.points[i].x()
    }

    fn opportunity_count(&self, i: usize) -> f64 {
        self.weights[i]
    }
}
