//! Voxel identifiers, the chunk/world capabilities a snapshot reads from, and
//! a minimal in-memory column store implementing them.

pub mod column;
pub mod provider;
pub mod store;
pub mod voxel;

pub use column::{ColumnChunk, ColumnError};
pub use provider::{VoxelChunk, VoxelReader, WorldProvider};
pub use store::ChunkStore;
pub use voxel::VoxelTypeId;
