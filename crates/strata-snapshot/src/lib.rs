//! Dense, immutable voxel snapshots of a region of a chunked world.
//!
//! [`RegionSnapshot::try_create`] copies every voxel of a query box plus a
//! one-cell border into a flat local buffer, but only once every chunk column
//! the border touches is resident. Otherwise it reports
//! [`SnapshotResult::NotReady`] and the caller retries later. Reads from a
//! built snapshot never touch the world again, so chunks may unload freely
//! afterwards.

pub mod grid;
pub mod snapshot;

pub use grid::{ChunkGrid, contains_gaps, find_gap};
pub use snapshot::{RegionSnapshot, SnapshotResult};
pub use strata_voxel::VoxelReader;
