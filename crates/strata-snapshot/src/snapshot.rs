//! The region snapshot itself: construction with gap detection, and
//! fail-open reads.

use glam::{IVec3, UVec3};
use strata_coords::{CellBox, ChunkCoord, ChunkRect};
use strata_voxel::{VoxelChunk, VoxelReader, VoxelTypeId, WorldProvider};

use crate::grid::{ChunkGrid, find_gap};

/// Outcome of [`RegionSnapshot::try_create`].
#[must_use]
#[derive(Debug)]
pub enum SnapshotResult {
    /// Every required column was resident; the snapshot is fully populated.
    Ready(RegionSnapshot),
    /// At least one required column is not resident yet. Retry later.
    NotReady,
}

impl SnapshotResult {
    /// Returns `true` for [`SnapshotResult::Ready`].
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrows the snapshot if one was built.
    pub fn ready(&self) -> Option<&RegionSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::NotReady => None,
        }
    }

    /// Converts into the snapshot if one was built.
    pub fn into_option(self) -> Option<RegionSnapshot> {
        self.into()
    }
}

impl From<SnapshotResult> for Option<RegionSnapshot> {
    fn from(result: SnapshotResult) -> Self {
        match result {
            SnapshotResult::Ready(snapshot) => Some(snapshot),
            SnapshotResult::NotReady => None,
        }
    }
}

/// A dense, immutable copy of every voxel in a query box plus a one-cell
/// border.
///
/// Local index `(0, 0, 0)` is world cell `from - (1, 1, 1)`; the extent on
/// each axis is `(to - from) + 3`. The snapshot owns its buffer outright and
/// keeps no references into the world.
#[derive(Clone, Debug)]
pub struct RegionSnapshot {
    /// World cells held, border included.
    cells: CellBox,
    /// Columns that were fetched while building.
    chunk_rect: ChunkRect,
    /// One entry per cell of `cells`, X fastest.
    voxels: Vec<VoxelTypeId>,
}

impl RegionSnapshot {
    /// Builds a snapshot of `[from, to]` (inclusive, plus a one-cell border).
    ///
    /// Columns are fetched over `[from - padding, to + padding]` on X/Z;
    /// `padding` never changes the voxels copied, only how many columns are
    /// fetched. The one-cell border's own columns are always fetched, so a
    /// `padding` of 0 behaves like 1. Returns [`SnapshotResult::NotReady`] if
    /// any column touched by the bordered box is absent; absent columns that
    /// only the padding reaches do not block the build.
    ///
    /// Corners are normalized componentwise, so `from > to` on an axis is
    /// treated as the swapped box. A border cell past `i32::MIN` or
    /// `i32::MAX` does not exist, so on that side the box is clamped and the
    /// extent is one less than `(to - from) + 3`.
    pub fn try_create<P>(world: &P, from: IVec3, to: IVec3, padding: u32) -> SnapshotResult
    where
        P: WorldProvider + ?Sized,
    {
        let margin = i32::try_from(padding).unwrap_or(i32::MAX).max(1);
        let chunk_rect = ChunkRect::covering(from, to, margin);
        let grid = ChunkGrid::fetch(world, chunk_rect);

        let cells = CellBox::new(from, to).expanded(1);

        if let Some(gap) = find_gap(&cells, &grid) {
            tracing::debug!(
                "Snapshot {:?}..{:?} not ready: column ({}, {}) not resident",
                cells.min,
                cells.max,
                gap.x,
                gap.z
            );
            return SnapshotResult::NotReady;
        }

        let Some(voxels) = copy_cells(&cells, &grid) else {
            return SnapshotResult::NotReady;
        };

        tracing::trace!(
            "Built snapshot {:?}..{:?} ({} voxels, {} columns fetched)",
            cells.min,
            cells.max,
            voxels.len(),
            chunk_rect.len()
        );

        SnapshotResult::Ready(Self {
            cells,
            chunk_rect,
            voxels,
        })
    }

    /// Returns the voxel at world cell `(x, y, z)`.
    ///
    /// Positions outside [`bounds`](Self::bounds) are a caller bug: they are
    /// logged with their local offsets and read as Air instead of panicking.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelTypeId {
        let pos = IVec3::new(x, y, z);
        match self.cells.local_index(pos) {
            Some(index) => self.voxels[index],
            None => {
                let local = self.cells.local_offset(pos);
                tracing::error!(
                    "RegionSnapshot::get_voxel out of range: local ({}, {}, {}), size {:?}",
                    local.x,
                    local.y,
                    local.z,
                    self.size()
                );
                VoxelTypeId::AIR
            }
        }
    }

    /// World cell stored at local index `(0, 0, 0)`.
    pub fn origin(&self) -> IVec3 {
        self.cells.min
    }

    /// Extent of the stored cells on each axis.
    pub fn size(&self) -> UVec3 {
        self.cells.size()
    }

    /// World cells held, border included.
    pub fn bounds(&self) -> CellBox {
        self.cells
    }

    /// Columns that were fetched while building. Only those under
    /// [`bounds`](Self::bounds) are guaranteed to have been resident.
    pub fn chunk_rect(&self) -> ChunkRect {
        self.chunk_rect
    }

    /// Minimum corner of the fetched columns. The fetched rectangle always
    /// includes the border's own columns, so with `padding` 0 this is
    /// `(from - 1) >> 4` rather than `from >> 4`.
    pub fn chunk_origin(&self) -> ChunkCoord {
        self.chunk_rect.min
    }

    /// Returns `true` if world cell `pos` is held by this snapshot.
    pub fn contains(&self, pos: IVec3) -> bool {
        self.cells.contains(pos)
    }

    /// Raw voxel buffer, indexed `x + y * size.x + z * size.x * size.y` in
    /// local coordinates.
    pub fn voxels(&self) -> &[VoxelTypeId] {
        &self.voxels
    }
}

impl VoxelReader for RegionSnapshot {
    fn voxel_at(&self, pos: IVec3) -> VoxelTypeId {
        self.get_voxel(pos.x, pos.y, pos.z)
    }
}

/// Copies every cell of `cells` out of its owning column, one column lookup
/// per `(x, z)`. Returns `None` only if a column is missing, which a passed
/// gap scan rules out.
fn copy_cells<C>(cells: &CellBox, grid: &ChunkGrid<'_, C>) -> Option<Vec<VoxelTypeId>>
where
    C: VoxelChunk,
{
    let size = cells.size();
    let (sx, sy) = (size.x as usize, size.y as usize);
    let mut voxels = vec![VoxelTypeId::AIR; cells.volume()];

    for z in cells.min.z..=cells.max.z {
        let lz = (z - cells.min.z) as usize;
        for x in cells.min.x..=cells.max.x {
            let lx = (x - cells.min.x) as usize;
            let chunk = grid.get(ChunkCoord::containing(x, z))?;
            for y in cells.min.y..=cells.max.y {
                let ly = (y - cells.min.y) as usize;
                voxels[lx + ly * sx + lz * sx * sy] = chunk.get_voxel(x, y, z);
            }
        }
    }

    Some(voxels)
}
