//! World, chunk-grid, and cache-local coordinate mapping.
//!
//! Three coordinate spaces appear throughout Strata:
//!
//! 1. **World space**: signed integer voxel coordinates ([`glam::IVec3`]).
//! 2. **Chunk space**: the horizontal grid of chunk columns. A world
//!    coordinate maps to its column by an arithmetic right shift of
//!    [`CHUNK_SHIFT`], so negative coordinates floor toward −∞.
//! 3. **Local space**: dense indices into a flat buffer that covers a
//!    [`CellBox`], with X varying fastest.
//!
//! ```rust
//! use glam::IVec3;
//! use strata_coords::{CellBox, ChunkCoord};
//!
//! assert_eq!(ChunkCoord::containing(-1, 17), ChunkCoord::new(-1, 1));
//!
//! let cells = CellBox::new(IVec3::new(0, 0, 0), IVec3::new(1, 1, 1));
//! assert_eq!(cells.local_index(IVec3::new(1, 0, 0)), Some(1));
//! assert_eq!(cells.local_index(IVec3::new(2, 0, 0)), None);
//! ```

mod cell_box;
mod chunk;

pub use cell_box::CellBox;
pub use chunk::{ChunkCoord, ChunkRect};

/// Number of bits a world X/Z coordinate is shifted right to obtain its chunk
/// coordinate.
pub const CHUNK_SHIFT: u32 = 4;

/// Edge length of a chunk column in voxels (16).
pub const CHUNK_EDGE: i32 = 1 << CHUNK_SHIFT;

/// Converts a single world-space axis value to its chunk-grid axis value.
#[inline]
pub fn world_to_chunk(world: i32) -> i32 {
    world >> CHUNK_SHIFT
}
