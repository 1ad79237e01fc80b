//! In-memory owner for resident chunk columns, keyed by [`ChunkCoord`].
//!
//! The [`ChunkStore`] provides O(1) column lookup, insert, and removal using
//! an [`FxHashMap`](rustc_hash::FxHashMap) for fast hashing of small
//! fixed-size keys. It is the reference [`WorldProvider`].

use glam::IVec3;
use rustc_hash::FxHashMap;
use strata_coords::ChunkCoord;

use crate::column::ColumnChunk;
use crate::provider::{VoxelChunk, VoxelReader, WorldProvider};
use crate::voxel::VoxelTypeId;

/// Owns all currently-resident columns.
#[derive(Default)]
pub struct ChunkStore {
    chunks: FxHashMap<ChunkCoord, ColumnChunk>,
}

impl ChunkStore {
    /// Creates an empty store with no resident columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a column at its own coordinate, replacing any previous one.
    pub fn load_chunk(&mut self, chunk: ColumnChunk) {
        self.chunks.insert(chunk.coord(), chunk);
    }

    /// Removes and returns the column at `coord`.
    ///
    /// Returns `None` if no column was resident there.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) -> Option<ColumnChunk> {
        self.chunks.remove(&coord)
    }

    /// Immutable access to a resident column.
    pub fn get(&self, coord: ChunkCoord) -> Option<&ColumnChunk> {
        self.chunks.get(&coord)
    }

    /// Returns `true` if a column is resident at `coord`.
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Number of resident columns.
    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    /// Sets a voxel through its owning column.
    ///
    /// Returns `false` if the owning column is not resident or the cell is
    /// outside its stored layers.
    pub fn set_voxel(&mut self, pos: IVec3, voxel: VoxelTypeId) -> bool {
        match self.chunks.get_mut(&ChunkCoord::from_world(pos)) {
            Some(chunk) => chunk.set_voxel(pos.x, pos.y, pos.z, voxel),
            None => false,
        }
    }
}

impl WorldProvider for ChunkStore {
    type Chunk = ColumnChunk;

    fn get_chunk(&self, chunk_x: i32, chunk_z: i32) -> Option<&ColumnChunk> {
        self.chunks.get(&ChunkCoord::new(chunk_x, chunk_z))
    }
}

impl VoxelReader for ChunkStore {
    /// Reads straight through to the owning column; missing columns read as air.
    fn voxel_at(&self, pos: IVec3) -> VoxelTypeId {
        self.get(ChunkCoord::from_world(pos))
            .map_or(VoxelTypeId::AIR, |chunk| chunk.get_voxel(pos.x, pos.y, pos.z))
    }
}
