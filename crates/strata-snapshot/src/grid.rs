//! Borrowed chunk handles over a chunk-grid rectangle, and the gap scan.

use strata_coords::{CellBox, ChunkCoord, ChunkRect};
use strata_voxel::WorldProvider;

/// Dense grid of chunk handles fetched from a [`WorldProvider`].
///
/// Slot `[chunk_x - rect.min.x, chunk_z - rect.min.z]` holds the provider's
/// answer for that column; `None` means the column was not resident at fetch
/// time. The grid only borrows chunks and lives no longer than the provider
/// borrow it was fetched under.
pub struct ChunkGrid<'w, C> {
    rect: ChunkRect,
    slots: Vec<Option<&'w C>>,
}

impl<'w, C> ChunkGrid<'w, C> {
    /// Asks `world` for every column in `rect`, once each.
    pub fn fetch<P>(world: &'w P, rect: ChunkRect) -> Self
    where
        P: WorldProvider<Chunk = C> + ?Sized,
    {
        let slots = rect
            .iter()
            .map(|coord| world.get_chunk(coord.x, coord.z))
            .collect();
        Self { rect, slots }
    }

    /// Rectangle of columns this grid was fetched over.
    pub fn rect(&self) -> ChunkRect {
        self.rect
    }

    /// Chunk at `coord`, or `None` if it was absent or lies outside the grid.
    pub fn get(&self, coord: ChunkCoord) -> Option<&'w C> {
        self.rect.slot(coord).and_then(|i| self.slots[i])
    }

    /// Number of slots holding a resident chunk.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Returns the first column (in slot order) that `cells` touches but `grid`
/// has no chunk for.
///
/// Only horizontal presence is checked. Chunks are full-height columns, so a
/// resident column answers every Y; a per-Y completeness test for worlds that
/// load columns partially would go in the loop below.
pub fn find_gap<C>(cells: &CellBox, grid: &ChunkGrid<'_, C>) -> Option<ChunkCoord> {
    cells
        .chunk_rect()
        .iter()
        .find(|coord| grid.get(*coord).is_none())
}

/// Returns `true` if any column touched by `cells` is missing from `grid`.
pub fn contains_gaps<C>(cells: &CellBox, grid: &ChunkGrid<'_, C>) -> bool {
    find_gap(cells, grid).is_some()
}
