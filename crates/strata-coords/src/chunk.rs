//! Chunk-grid addressing: single columns and inclusive rectangles of columns.

use glam::IVec3;

use crate::{CHUNK_SHIFT, world_to_chunk};

/// Identifies a chunk column on the horizontal chunk grid.
///
/// Chunks span every Y, so only X and Z are part of the address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkCoord {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Returns the column owning world cell `(x, _, z)`.
    pub fn containing(x: i32, z: i32) -> Self {
        Self::new(world_to_chunk(x), world_to_chunk(z))
    }

    /// Returns the column owning a world position; Y is ignored.
    pub fn from_world(pos: IVec3) -> Self {
        Self::containing(pos.x, pos.z)
    }

    /// World X/Z of this column's minimum corner.
    pub fn min_world(self) -> (i32, i32) {
        (self.x << CHUNK_SHIFT, self.z << CHUNK_SHIFT)
    }

    /// Returns the neighboring column offset by `(dx, dz)`.
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }
}

/// An inclusive rectangle of chunk columns, `[min.x ..= max.x] × [min.z ..= max.z]`.
///
/// Slots are laid out densely with X varying fastest, so a rectangle doubles
/// as the shape of a flat per-column buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkRect {
    /// Minimum column (inclusive).
    pub min: ChunkCoord,
    /// Maximum column (inclusive).
    pub max: ChunkCoord,
}

impl ChunkRect {
    /// Creates a rectangle from two corners, normalizing them componentwise.
    pub fn new(a: ChunkCoord, b: ChunkCoord) -> Self {
        Self {
            min: ChunkCoord::new(a.x.min(b.x), a.z.min(b.z)),
            max: ChunkCoord::new(a.x.max(b.x), a.z.max(b.z)),
        }
    }

    /// Columns covering world cells `[from - margin, to + margin]` on X/Z.
    ///
    /// Computed as `(from - margin) >> 4` and `(to + margin) >> 4`, so a large
    /// margin widens the rectangle by whole columns only once it crosses a
    /// chunk boundary.
    pub fn covering(from: IVec3, to: IVec3, margin: i32) -> Self {
        let lo = from.min(to).saturating_sub(IVec3::splat(margin));
        let hi = from.max(to).saturating_add(IVec3::splat(margin));
        Self {
            min: ChunkCoord::from_world(lo),
            max: ChunkCoord::from_world(hi),
        }
    }

    /// Number of columns along X.
    pub fn width(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    /// Number of columns along Z.
    pub fn depth(&self) -> usize {
        (self.max.z - self.min.z + 1) as usize
    }

    /// Total number of columns in the rectangle.
    pub fn len(&self) -> usize {
        self.width() * self.depth()
    }

    /// Always `false`: an inclusive rectangle holds at least one column.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `coord` lies inside the rectangle.
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Returns `true` if every column of `other` lies inside `self`.
    pub fn contains_rect(&self, other: &ChunkRect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Dense slot index of `coord`, or `None` if it lies outside.
    pub fn slot(&self, coord: ChunkCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let dx = (coord.x - self.min.x) as usize;
        let dz = (coord.z - self.min.z) as usize;
        Some(dx + dz * self.width())
    }

    /// Iterates every column in slot order (X fastest).
    pub fn iter(&self) -> impl Iterator<Item = ChunkCoord> + use<> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| ChunkCoord::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_splits_at_chunk_edge() {
        assert_eq!(ChunkCoord::containing(15, 15), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::containing(16, 15), ChunkCoord::new(1, 0));
        assert_eq!(ChunkCoord::containing(-1, 0), ChunkCoord::new(-1, 0));
    }

    #[test]
    fn test_from_world_ignores_y() {
        let a = ChunkCoord::from_world(IVec3::new(20, -500, 40));
        let b = ChunkCoord::from_world(IVec3::new(20, 9000, 40));
        assert_eq!(a, b);
        assert_eq!(a, ChunkCoord::new(1, 2));
    }

    #[test]
    fn test_min_world_round_trips_through_containing() {
        let coord = ChunkCoord::new(-3, 7);
        let (x, z) = coord.min_world();
        assert_eq!((x, z), (-48, 112));
        assert_eq!(ChunkCoord::containing(x, z), coord);
        assert_eq!(ChunkCoord::containing(x - 1, z), coord.offset(-1, 0));
    }

    #[test]
    fn test_covering_without_margin() {
        let rect = ChunkRect::covering(IVec3::new(10, 0, 20), IVec3::new(18, 5, 20), 0);
        assert_eq!(rect.min, ChunkCoord::new(0, 1));
        assert_eq!(rect.max, ChunkCoord::new(1, 1));
        assert_eq!(rect.width(), 2);
        assert_eq!(rect.depth(), 1);
        assert_eq!(rect.len(), 2);
    }

    #[test]
    fn test_covering_margin_crosses_boundaries() {
        let rect = ChunkRect::covering(IVec3::new(2, 0, 2), IVec3::new(10, 0, 10), 3);
        assert_eq!(rect.min, ChunkCoord::new(-1, -1));
        assert_eq!(rect.max, ChunkCoord::new(0, 0));

        let small = ChunkRect::covering(IVec3::new(2, 0, 2), IVec3::new(10, 0, 10), 2);
        assert_eq!(small.min, ChunkCoord::new(0, 0));
        assert_eq!(small.max, ChunkCoord::new(0, 0));
    }

    #[test]
    fn test_covering_normalizes_corners() {
        let a = ChunkRect::covering(IVec3::new(40, 0, -5), IVec3::new(-5, 0, 40), 0);
        let b = ChunkRect::covering(IVec3::new(-5, 0, -5), IVec3::new(40, 0, 40), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_slot_is_dense_and_x_fastest() {
        let rect = ChunkRect::new(ChunkCoord::new(-1, 4), ChunkCoord::new(1, 5));
        assert_eq!(rect.slot(ChunkCoord::new(-1, 4)), Some(0));
        assert_eq!(rect.slot(ChunkCoord::new(0, 4)), Some(1));
        assert_eq!(rect.slot(ChunkCoord::new(1, 4)), Some(2));
        assert_eq!(rect.slot(ChunkCoord::new(-1, 5)), Some(3));
        assert_eq!(rect.slot(ChunkCoord::new(1, 5)), Some(5));
        assert_eq!(rect.slot(ChunkCoord::new(2, 5)), None);
        assert_eq!(rect.slot(ChunkCoord::new(0, 3)), None);
    }

    #[test]
    fn test_iter_matches_slot_order() {
        let rect = ChunkRect::new(ChunkCoord::new(2, -2), ChunkCoord::new(4, 0));
        let coords: Vec<_> = rect.iter().collect();
        assert_eq!(coords.len(), rect.len());
        for (i, coord) in coords.iter().enumerate() {
            assert_eq!(rect.slot(*coord), Some(i));
        }
    }

    #[test]
    fn test_contains_rect() {
        let outer = ChunkRect::new(ChunkCoord::new(-2, -2), ChunkCoord::new(2, 2));
        let inner = ChunkRect::new(ChunkCoord::new(-1, 0), ChunkCoord::new(2, 1));
        let poking = ChunkRect::new(ChunkCoord::new(-1, 0), ChunkCoord::new(3, 1));
        assert!(outer.contains_rect(&inner));
        assert!(!outer.contains_rect(&poking));
    }
}
