use geo::Point;

/// a set of geographic points serving as destinations or opportunities in
/// an accessibility analysis. gridded and freeform implementations alike
/// present themselves as a flattened one-dimensional enumeration, so a
/// gridded point set has width × height points.
pub trait PointSet: Send + Sync {
    /// total number of points in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// WGS84 latitude of point `i` in floating degrees.
    fn lat(&self, i: usize) -> f64;

    /// WGS84 longitude of point `i` in floating degrees.
    fn lon(&self, i: usize) -> f64;

    fn point(&self, i: usize) -> Point<f64> {
        Point::new(self.lon(i), self.lat(i))
    }

    /// the quantity or magnitude of opportunities at point `i` (e.g. jobs,
    /// people).
    fn opportunity_count(&self, i: usize) -> f64;

    /// the sum of the opportunity counts at all points in this set.
    fn sum_total_opportunities(&self) -> f64 {
        (0..self.len()).map(|i| self.opportunity_count(i)).sum()
    }

    /// a unique id for point `i` within the scope of this point set.
    fn id(&self, i: usize) -> String {
        i.to_string()
    }
}
