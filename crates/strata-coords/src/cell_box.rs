//! Inclusive world-space boxes and their dense local indexing.

use glam::{IVec3, UVec3};

use crate::chunk::{ChunkCoord, ChunkRect};

/// An inclusive box of world cells, `[min, max]` on every axis.
///
/// A box also defines a local index space: cell `min` is local `(0, 0, 0)`
/// and a flat buffer of [`volume`](Self::volume) entries stores the cells
/// with X varying fastest, then Y, then Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBox {
    /// Minimum corner (inclusive).
    pub min: IVec3,
    /// Maximum corner (inclusive).
    pub max: IVec3,
}

impl CellBox {
    /// Creates a box from two corners, normalizing them componentwise.
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the box grown by `cells` on every side of every axis.
    ///
    /// Corners saturate at the `i32` range.
    pub fn expanded(self, cells: i32) -> Self {
        let d = IVec3::splat(cells);
        Self {
            min: self.min.saturating_sub(d),
            max: self.max.saturating_add(d),
        }
    }

    /// Extent along each axis (`max - min + 1`).
    pub fn size(&self) -> UVec3 {
        (self.max - self.min + IVec3::ONE).as_uvec3()
    }

    /// Number of cells in the box.
    pub fn volume(&self) -> usize {
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    /// Returns `true` if `pos` lies inside the box.
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Offset of `pos` from the minimum corner; may be negative or past the
    /// extent for cells outside the box, and wraps instead of overflowing.
    pub fn local_offset(&self, pos: IVec3) -> IVec3 {
        pos.wrapping_sub(self.min)
    }

    /// Flat buffer index of `pos`, or `None` if it lies outside the box.
    pub fn local_index(&self, pos: IVec3) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let local = self.local_offset(pos).as_uvec3();
        let size = self.size();
        Some(
            local.x as usize
                + local.y as usize * size.x as usize
                + local.z as usize * size.x as usize * size.y as usize,
        )
    }

    /// The chunk columns this box touches.
    pub fn chunk_rect(&self) -> ChunkRect {
        ChunkRect {
            min: ChunkCoord::from_world(self.min),
            max: ChunkCoord::from_world(self.max),
        }
    }

    /// Iterates every cell in local-index order.
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| IVec3::new(x, y, z)))
        })
    }
}
