//! The per-cell value stored by chunks and copied into snapshots.

use serde::{Deserialize, Serialize};

/// Compact identifier stored inside every voxel cell (2 bytes).
///
/// The meaning of each ID is owned by whatever registry the host uses; only
/// [`VoxelTypeId::AIR`] is fixed. Air is ID 0 so that zero-initialized
/// buffers represent empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelTypeId(pub u16);

impl VoxelTypeId {
    /// Empty space.
    pub const AIR: VoxelTypeId = VoxelTypeId(0);

    /// Returns `true` for [`VoxelTypeId::AIR`].
    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}
