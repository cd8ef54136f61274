use super::NetworkError;
use geo_types::{Coord, Rect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// scaling factor between floating-point degrees and the 32-bit fixed-point
/// representation stored in the coordinate columns.
pub const FIXED_FACTOR: f64 = 1e7;

/// converts floating degrees into fixed-point degrees. truncates toward
/// zero; lossy but deterministic.
pub fn floating_degrees_to_fixed(degrees: f64) -> i32 {
    (degrees * FIXED_FACTOR) as i32
}

/// converts fixed-point degrees back into floating degrees.
pub fn fixed_degrees_to_floating(fixed: i32) -> f64 {
    fixed as f64 / FIXED_FACTOR
}

/// converts an envelope in floating degrees to fixed degrees, keeping the
/// fixed values in an f64 rect for use with floating-point geometry types.
pub fn rect_to_fixed(rect: &Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: floating_degrees_to_fixed(rect.min().x) as f64,
            y: floating_degrees_to_fixed(rect.min().y) as f64,
        },
        Coord {
            x: floating_degrees_to_fixed(rect.max().x) as f64,
            y: floating_degrees_to_fixed(rect.max().y) as f64,
        },
    )
}

/// bit-flag attributes assignable to a vertex. each flag occupies a single
/// bit of the 8-bit flag column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexFlag {
    /// this intersection has a traffic signal
    TrafficSignal,
    ParkAndRide,
    BikeShare,
}

impl VertexFlag {
    /// the single-bit mask for this flag within the flag column.
    pub fn mask(&self) -> u8 {
        match self {
            VertexFlag::TrafficSignal => 1 << 0,
            VertexFlag::ParkAndRide => 1 << 1,
            VertexFlag::BikeShare => 1 << 2,
        }
    }
}

/// street-network vertices stored as parallel columns indexed by a stable
/// zero-based vertex index. append-only; vertices are never deleted, so an
/// index stays valid for the lifetime of the store.
///
/// an extend-only copy (see [`VertexStore::extend_only_copy`]) layers a
/// private overlay on top of a shared immutable base segment: reads below
/// the split point delegate to the base columns without duplicating them,
/// appends land only in the overlay. one base network can therefore be
/// shared read-only across concurrent queries while each query appends its
/// own scenario vertices without locking.
#[derive(Debug, Default, Clone)]
pub struct VertexStore {
    /// shared prefix of an extend-only copy. `None` for a base store.
    base: Option<Arc<VertexStore>>,
    fixed_lats: Vec<i32>,
    fixed_lons: Vec<i32>,
    vertex_flags: Vec<u8>,
}

/// value snapshot of one vertex row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexEntry {
    pub index: usize,
    pub fixed_lat: i32,
    pub fixed_lon: i32,
    flags: u8,
}

impl VertexEntry {
    pub fn lat(&self) -> f64 {
        fixed_degrees_to_floating(self.fixed_lat)
    }

    pub fn lon(&self) -> f64 {
        fixed_degrees_to_floating(self.fixed_lon)
    }

    pub fn flag(&self, flag: VertexFlag) -> bool {
        self.flags & flag.mask() != 0
    }
}

impl VertexStore {
    pub fn new() -> VertexStore {
        VertexStore::default()
    }

    pub fn with_capacity(capacity: usize) -> VertexStore {
        VertexStore {
            base: None,
            fixed_lats: Vec::with_capacity(capacity),
            fixed_lons: Vec::with_capacity(capacity),
            vertex_flags: Vec::with_capacity(capacity),
        }
    }

    /// number of vertices visible through this store, including any shared
    /// base segment.
    pub fn vertex_count(&self) -> usize {
        self.base_count() + self.vertex_flags.len()
    }

    fn base_count(&self) -> usize {
        self.base.as_ref().map_or(0, |base| base.vertex_count())
    }

    /// appends a vertex given coordinates in floating-point degrees.
    ///
    /// # Returns
    ///
    /// * the index of the new vertex
    pub fn add_vertex(&mut self, lat: f64, lon: f64) -> usize {
        self.add_vertex_fixed(
            floating_degrees_to_fixed(lat),
            floating_degrees_to_fixed(lon),
        )
    }

    /// appends a vertex given coordinates in fixed-point degrees.
    ///
    /// # Returns
    ///
    /// * the index of the new vertex
    pub fn add_vertex_fixed(&mut self, fixed_lat: i32, fixed_lon: i32) -> usize {
        let index = self.vertex_count();
        self.fixed_lats.push(fixed_lat);
        self.fixed_lons.push(fixed_lon);
        self.vertex_flags.push(0);
        index
    }

    pub fn fixed_lat(&self, index: usize) -> Result<i32, NetworkError> {
        let (segment, local) = self.resolve(index)?;
        Ok(segment.fixed_lats[local])
    }

    pub fn fixed_lon(&self, index: usize) -> Result<i32, NetworkError> {
        let (segment, local) = self.resolve(index)?;
        Ok(segment.fixed_lons[local])
    }

    pub fn lat(&self, index: usize) -> Result<f64, NetworkError> {
        Ok(fixed_degrees_to_floating(self.fixed_lat(index)?))
    }

    pub fn lon(&self, index: usize) -> Result<f64, NetworkError> {
        Ok(fixed_degrees_to_floating(self.fixed_lon(index)?))
    }

    pub fn set_lat(&mut self, index: usize, lat: f64) -> Result<(), NetworkError> {
        self.set_fixed_lat(index, floating_degrees_to_fixed(lat))
    }

    pub fn set_lon(&mut self, index: usize, lon: f64) -> Result<(), NetworkError> {
        self.set_fixed_lon(index, floating_degrees_to_fixed(lon))
    }

    pub fn set_fixed_lat(&mut self, index: usize, fixed_lat: i32) -> Result<(), NetworkError> {
        let local = self.resolve_mut(index)?;
        self.fixed_lats[local] = fixed_lat;
        Ok(())
    }

    pub fn set_fixed_lon(&mut self, index: usize, fixed_lon: i32) -> Result<(), NetworkError> {
        let local = self.resolve_mut(index)?;
        self.fixed_lons[local] = fixed_lon;
        Ok(())
    }

    /// tests a single flag bit on the vertex at `index`.
    pub fn flag(&self, index: usize, flag: VertexFlag) -> Result<bool, NetworkError> {
        let (segment, local) = self.resolve(index)?;
        Ok(segment.vertex_flags[local] & flag.mask() != 0)
    }

    /// switches on a single flag bit on the vertex at `index`.
    pub fn set_flag(&mut self, index: usize, flag: VertexFlag) -> Result<(), NetworkError> {
        let local = self.resolve_mut(index)?;
        self.vertex_flags[local] |= flag.mask();
        Ok(())
    }

    /// a read-only view of the vertex at `index`.
    pub fn entry(&self, index: usize) -> Result<VertexEntry, NetworkError> {
        let (segment, local) = self.resolve(index)?;
        Ok(VertexEntry {
            index,
            fixed_lat: segment.fixed_lats[local],
            fixed_lon: segment.fixed_lons[local],
            flags: segment.vertex_flags[local],
        })
    }

    /// iterates all vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = VertexEntry> + '_ {
        (0..self.vertex_count()).filter_map(move |index| self.entry(index).ok())
    }

    /// makes a copy of this store that can have vertices appended to it but
    /// whose existing prefix stays shared with `self`. reads below the
    /// current vertex count delegate to this store's columns; appends go
    /// only into the copy. writes below the split point through the copy
    /// fail with [`NetworkError::SharedSegmentWrite`].
    pub fn extend_only_copy(self: &Arc<Self>) -> VertexStore {
        VertexStore {
            base: Some(Arc::clone(self)),
            fixed_lats: Vec::new(),
            fixed_lons: Vec::new(),
            vertex_flags: Vec::new(),
        }
    }

    /// resolves a vertex index to the store segment owning its row and the
    /// position within that segment's columns.
    fn resolve(&self, index: usize) -> Result<(&VertexStore, usize), NetworkError> {
        let count = self.vertex_count();
        if index >= count {
            return Err(NetworkError::VertexIndexOutOfBounds { index, count });
        }
        match &self.base {
            Some(base) if index < base.vertex_count() => base.resolve(index),
            _ => Ok((self, index - self.base_count())),
        }
    }

    /// resolves a vertex index for mutation. writes must land in this
    /// store's own overlay: the base segment of an extend-only copy is
    /// shared with other queries and is read-only through the copy.
    fn resolve_mut(&mut self, index: usize) -> Result<usize, NetworkError> {
        let count = self.vertex_count();
        if index >= count {
            return Err(NetworkError::VertexIndexOutOfBounds { index, count });
        }
        let split = self.base_count();
        if index < split {
            return Err(NetworkError::SharedSegmentWrite {
                index,
                base_count: split,
            });
        }
        Ok(index - split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_conversion() {
        // values exactly representable in binary convert without rounding
        assert_eq!(floating_degrees_to_fixed(60.5), 605_000_000);
        assert_eq!(floating_degrees_to_fixed(-24.25), -242_500_000);
        let lat = fixed_degrees_to_floating(601_699_000);
        assert!((lat - 60.1699).abs() < 1e-7);
    }

    #[test]
    fn test_conversion_truncates_toward_zero() {
        // anything below the 1e-7 resolution is dropped, not rounded
        assert_eq!(floating_degrees_to_fixed(0.000_000_019), 0);
        assert_eq!(floating_degrees_to_fixed(-0.000_000_019), 0);
    }

    #[test]
    fn test_add_and_read_vertices() {
        let mut store = VertexStore::new();
        let a = store.add_vertex(60.5, 24.75);
        let b = store.add_vertex_fixed(601_700_000, 249_385_000);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(store.vertex_count(), 2);
        assert_eq!(store.fixed_lat(0).unwrap(), 605_000_000);
        assert_eq!(store.fixed_lon(1).unwrap(), 249_385_000);
        assert!((store.lat(1).unwrap() - 60.17).abs() < 1e-7);
        assert!(matches!(
            store.fixed_lat(2),
            Err(NetworkError::VertexIndexOutOfBounds { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_flags() {
        let mut store = VertexStore::new();
        let v = store.add_vertex(60.0, 25.0);
        assert!(!store.flag(v, VertexFlag::TrafficSignal).unwrap());
        store.set_flag(v, VertexFlag::TrafficSignal).unwrap();
        store.set_flag(v, VertexFlag::BikeShare).unwrap();
        assert!(store.flag(v, VertexFlag::TrafficSignal).unwrap());
        assert!(store.flag(v, VertexFlag::BikeShare).unwrap());
        assert!(!store.flag(v, VertexFlag::ParkAndRide).unwrap());
    }

    #[test]
    fn test_extend_only_copy_shares_prefix() {
        let mut base = VertexStore::new();
        base.add_vertex(60.0, 25.0);
        base.add_vertex(61.0, 26.0);
        let base = Arc::new(base);

        let mut copy = base.extend_only_copy();
        assert_eq!(copy.vertex_count(), 2);
        // reads below the split point observe the base columns
        assert_eq!(copy.fixed_lat(0).unwrap(), base.fixed_lat(0).unwrap());

        let appended = copy.add_vertex(62.0, 27.0);
        assert_eq!(appended, 2);
        assert_eq!(copy.vertex_count(), 3);
        // the base store is unaffected by appends to the copy
        assert_eq!(base.vertex_count(), 2);
        assert!(base.fixed_lat(2).is_err());
    }

    #[test]
    fn test_extend_only_copy_rejects_base_writes() {
        let mut base = VertexStore::new();
        base.add_vertex(60.0, 25.0);
        let base = Arc::new(base);

        let mut copy = base.extend_only_copy();
        assert!(matches!(
            copy.set_lat(0, 59.0),
            Err(NetworkError::SharedSegmentWrite {
                index: 0,
                base_count: 1
            })
        ));
        // appended vertices are writable
        let v = copy.add_vertex(61.0, 26.0);
        copy.set_lat(v, 61.5).unwrap();
        copy.set_flag(v, VertexFlag::ParkAndRide).unwrap();
        assert_eq!(copy.fixed_lat(v).unwrap(), 615_000_000);
    }

    #[test]
    fn test_chained_extend_only_copies() {
        let mut base = VertexStore::new();
        base.add_vertex(60.0, 25.0);
        let base = Arc::new(base);

        let mut first = base.extend_only_copy();
        first.add_vertex(61.0, 26.0);
        let first = Arc::new(first);

        let mut second = first.extend_only_copy();
        second.add_vertex(62.0, 27.0);
        assert_eq!(second.vertex_count(), 3);
        assert_eq!(second.fixed_lat(0).unwrap(), 600_000_000);
        assert_eq!(second.fixed_lat(1).unwrap(), 610_000_000);
        assert_eq!(second.fixed_lat(2).unwrap(), 620_000_000);
    }

    #[test]
    fn test_iter_spans_segments() {
        let mut base = VertexStore::new();
        base.add_vertex(60.0, 25.0);
        let base = Arc::new(base);
        let mut copy = base.extend_only_copy();
        copy.add_vertex(61.0, 26.0);

        let entries: Vec<_> = copy.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[1].fixed_lat, 610_000_000);
    }

    #[test]
    fn test_rect_to_fixed() {
        let rect = Rect::new(Coord { x: 24.0, y: 60.0 }, Coord { x: 25.0, y: 61.0 });
        let fixed = rect_to_fixed(&rect);
        assert_eq!(fixed.min().x, 240_000_000.0);
        assert_eq!(fixed.max().y, 610_000_000.0);
    }
}
