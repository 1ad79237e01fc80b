//! Read capabilities consumed by snapshot construction and exposed to
//! geometry consumers.
//!
//! Chunk lifetime is owned entirely by the [`WorldProvider`]; callers only
//! ever hold shared borrows of the chunks it hands out.

use glam::IVec3;

use crate::voxel::VoxelTypeId;

/// A resident chunk column that can answer voxel reads in world space.
pub trait VoxelChunk {
    /// Returns the voxel at world cell `(x, y, z)`.
    ///
    /// Must return a value for every Y within this column's footprint.
    fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelTypeId;
}

/// Source of resident chunk columns, addressed by chunk-grid coordinates.
pub trait WorldProvider {
    /// Chunk type handed out by this provider.
    type Chunk: VoxelChunk;

    /// Returns the chunk at `(chunk_x, chunk_z)`, or `None` if it is not
    /// currently resident.
    ///
    /// Called once per chunk-grid cell per snapshot build, so it must be
    /// cheap and side-effect free.
    fn get_chunk(&self, chunk_x: i32, chunk_z: i32) -> Option<&Self::Chunk>;
}

impl<P: WorldProvider + ?Sized> WorldProvider for &P {
    type Chunk = P::Chunk;

    fn get_chunk(&self, chunk_x: i32, chunk_z: i32) -> Option<&Self::Chunk> {
        (**self).get_chunk(chunk_x, chunk_z)
    }
}

/// Random-access voxel reads in world space, as used by geometry builders.
///
/// Implementations never fail: positions they cannot answer read as air.
pub trait VoxelReader {
    /// Returns the voxel at world position `pos`.
    fn voxel_at(&self, pos: IVec3) -> VoxelTypeId;
}
