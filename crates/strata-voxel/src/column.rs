//! Dense 16×H×16 voxel column, the reference [`VoxelChunk`] implementation.

use strata_coords::{CHUNK_EDGE, ChunkCoord};
use thiserror::Error;

use crate::provider::VoxelChunk;
use crate::voxel::VoxelTypeId;

/// Number of voxels in one horizontal layer of a column (16 × 16).
pub const LAYER_AREA: usize = (CHUNK_EDGE * CHUNK_EDGE) as usize;

/// Errors that can occur when building a column from raw voxels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// The supplied buffer does not hold exactly `16 × height × 16` voxels.
    #[error("column buffer holds {actual} voxels, expected {expected}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

/// A chunk column anchored at a chunk-grid coordinate.
///
/// Stores `height` layers starting at world Y `min_y`. Reads above or below
/// the stored layers return Air, so every Y is answerable. Reads outside the
/// column's X/Z footprint also return Air, with a warning log, because they
/// indicate the caller picked the wrong column.
#[derive(Clone, Debug)]
pub struct ColumnChunk {
    coord: ChunkCoord,
    min_y: i32,
    height: u32,
    /// Layer-major storage: `lx + lz * 16 + ly * 256`.
    voxels: Vec<VoxelTypeId>,
}

impl ColumnChunk {
    /// Creates an all-air column.
    pub fn new(coord: ChunkCoord, min_y: i32, height: u32) -> Self {
        Self::new_filled(coord, min_y, height, VoxelTypeId::AIR)
    }

    /// Creates a column with every stored cell set to `fill`.
    pub fn new_filled(coord: ChunkCoord, min_y: i32, height: u32, fill: VoxelTypeId) -> Self {
        Self {
            coord,
            min_y,
            height,
            voxels: vec![fill; LAYER_AREA * height as usize],
        }
    }

    /// Creates a column from a layer-major buffer (`lx + lz * 16 + ly * 256`).
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError::LengthMismatch`] if `voxels` does not hold
    /// exactly `256 × height` entries.
    pub fn from_voxels(
        coord: ChunkCoord,
        min_y: i32,
        height: u32,
        voxels: Vec<VoxelTypeId>,
    ) -> Result<Self, ColumnError> {
        let expected = LAYER_AREA * height as usize;
        if voxels.len() != expected {
            return Err(ColumnError::LengthMismatch {
                expected,
                actual: voxels.len(),
            });
        }
        Ok(Self {
            coord,
            min_y,
            height,
            voxels,
        })
    }

    /// Chunk-grid address of this column.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns `true` if world cell `(x, _, z)` belongs to this column.
    pub fn in_footprint(&self, x: i32, z: i32) -> bool {
        ChunkCoord::containing(x, z) == self.coord
    }

    /// Sets the voxel at world cell `(x, y, z)`.
    ///
    /// Returns `false` (and logs) if the cell lies outside the footprint, or
    /// `false` silently if it lies outside the stored layers.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: VoxelTypeId) -> bool {
        if !self.in_footprint(x, z) {
            tracing::warn!(
                "ColumnChunk::set_voxel outside column {:?}: ({}, {}, {})",
                self.coord,
                x,
                y,
                z
            );
            return false;
        }
        match self.index(x, y, z) {
            Some(i) => {
                self.voxels[i] = voxel;
                true
            }
            None => false,
        }
    }

    /// Fills the whole stored layer at world Y `y`. No-op outside the stored range.
    pub fn fill_layer(&mut self, y: i32, voxel: VoxelTypeId) {
        let Some(ly) = self.layer(y) else {
            return;
        };
        let start = ly * LAYER_AREA;
        self.voxels[start..start + LAYER_AREA].fill(voxel);
    }

    fn layer(&self, y: i32) -> Option<usize> {
        let ly = y.checked_sub(self.min_y)?;
        if ly < 0 || ly as u32 >= self.height {
            return None;
        }
        Some(ly as usize)
    }

    /// Storage index of an in-footprint cell, or `None` outside the stored layers.
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let ly = self.layer(y)?;
        let lx = (x & (CHUNK_EDGE - 1)) as usize;
        let lz = (z & (CHUNK_EDGE - 1)) as usize;
        Some(lx + lz * CHUNK_EDGE as usize + ly * LAYER_AREA)
    }
}

impl VoxelChunk for ColumnChunk {
    fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelTypeId {
        if !self.in_footprint(x, z) {
            tracing::warn!(
                "ColumnChunk::get_voxel outside column {:?}: ({}, {}, {})",
                self.coord,
                x,
                y,
                z
            );
            return VoxelTypeId::AIR;
        }
        self.index(x, y, z).map_or(VoxelTypeId::AIR, |i| self.voxels[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_column_is_air() {
        let column = ColumnChunk::new(ChunkCoord::new(0, 0), 0, 8);
        assert_eq!(column.get_voxel(0, 0, 0), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(15, 7, 15), VoxelTypeId::AIR);
    }

    #[test]
    fn test_set_then_get_uses_world_coordinates() {
        let mut column = ColumnChunk::new(ChunkCoord::new(2, -1), -4, 16);
        assert!(column.set_voxel(33, -4, -16, VoxelTypeId(7)));
        assert_eq!(column.get_voxel(33, -4, -16), VoxelTypeId(7));
        // Neighbors remain air.
        assert_eq!(column.get_voxel(32, -4, -16), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(33, -3, -16), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(33, -4, -15), VoxelTypeId::AIR);
    }

    #[test]
    fn test_reads_outside_stored_layers_are_air() {
        let column = ColumnChunk::new_filled(ChunkCoord::new(0, 0), 10, 4, VoxelTypeId(3));
        assert_eq!(column.get_voxel(5, 10, 5), VoxelTypeId(3));
        assert_eq!(column.get_voxel(5, 13, 5), VoxelTypeId(3));
        assert_eq!(column.get_voxel(5, 9, 5), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(5, 14, 5), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(5, i32::MIN, 5), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(5, i32::MAX, 5), VoxelTypeId::AIR);
    }

    #[test]
    fn test_reads_outside_footprint_are_air() {
        let column = ColumnChunk::new_filled(ChunkCoord::new(0, 0), 0, 4, VoxelTypeId(3));
        assert_eq!(column.get_voxel(16, 0, 0), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(0, 0, -1), VoxelTypeId::AIR);
    }

    #[test]
    fn test_set_outside_footprint_is_rejected() {
        let mut column = ColumnChunk::new(ChunkCoord::new(0, 0), 0, 4);
        assert!(!column.set_voxel(-1, 0, 0, VoxelTypeId(1)));
        assert!(!column.set_voxel(0, 4, 0, VoxelTypeId(1)));
        assert!(column.voxels.iter().all(|v| v.is_air()));
    }

    #[test]
    fn test_fill_layer() {
        let mut column = ColumnChunk::new(ChunkCoord::new(1, 1), 0, 4);
        column.fill_layer(2, VoxelTypeId(9));
        column.fill_layer(100, VoxelTypeId(9));
        assert_eq!(column.get_voxel(16, 2, 16), VoxelTypeId(9));
        assert_eq!(column.get_voxel(31, 2, 31), VoxelTypeId(9));
        assert_eq!(column.get_voxel(16, 1, 16), VoxelTypeId::AIR);
        assert_eq!(column.get_voxel(16, 3, 16), VoxelTypeId::AIR);
    }

    #[test]
    fn test_from_voxels_checks_length() {
        let err = ColumnChunk::from_voxels(ChunkCoord::new(0, 0), 0, 2, vec![VoxelTypeId(1); 10])
            .unwrap_err();
        assert_eq!(
            err,
            ColumnError::LengthMismatch {
                expected: 512,
                actual: 10
            }
        );

        let mut raw = vec![VoxelTypeId::AIR; 512];
        raw[1 + 2 * 16 + 256] = VoxelTypeId(4);
        let column = ColumnChunk::from_voxels(ChunkCoord::new(0, 0), 0, 2, raw).unwrap();
        assert_eq!(column.get_voxel(1, 1, 2), VoxelTypeId(4));
    }
}
