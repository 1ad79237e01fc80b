//! Seeded terrain columns for the demo world.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use strata_config::WorldConfig;
use strata_coords::{CHUNK_EDGE, ChunkCoord};
use strata_voxel::{ChunkStore, ColumnChunk, VoxelTypeId};

pub const STONE: VoxelTypeId = VoxelTypeId(1);
pub const DIRT: VoxelTypeId = VoxelTypeId(2);
pub const GRASS: VoxelTypeId = VoxelTypeId(3);

/// World Y of the grass layer at the column's flat baseline.
pub fn base_surface(config: &WorldConfig) -> i32 {
    config.min_y + config.column_height as i32 / 2
}

/// Generates one column: stone, three dirt layers, grass, then air, with a
/// per-cell surface jitter of up to 3 layers.
pub fn generate_column(coord: ChunkCoord, config: &WorldConfig) -> ColumnChunk {
    let mut rng = Xoshiro256StarStar::seed_from_u64(column_seed(config.seed, coord));
    let mut column = ColumnChunk::new(coord, config.min_y, config.column_height);
    let top = config.min_y + config.column_height as i32 - 1;
    let (x0, z0) = coord.min_world();

    for x in x0..x0 + CHUNK_EDGE {
        for z in z0..z0 + CHUNK_EDGE {
            let surface = (base_surface(config) + rng.gen_range(0..=3)).min(top);
            for y in config.min_y..=surface {
                let voxel = match surface - y {
                    0 => GRASS,
                    1..=3 => DIRT,
                    _ => STONE,
                };
                column.set_voxel(x, y, z, voxel);
            }
        }
    }
    column
}

/// Fills `[-radius, radius]²` with generated columns.
pub fn generate_world(config: &WorldConfig) -> ChunkStore {
    let r = config.radius_chunks as i32;
    let mut store = ChunkStore::new();
    for x in -r..=r {
        for z in -r..=r {
            store.load_chunk(generate_column(ChunkCoord::new(x, z), config));
        }
    }
    tracing::info!(
        "Generated {} columns (seed {}, radius {})",
        store.loaded_count(),
        config.seed,
        config.radius_chunks
    );
    store
}

fn column_seed(seed: u64, coord: ChunkCoord) -> u64 {
    let x = coord.x as u32 as u64;
    let z = coord.z as u32 as u64;
    seed ^ ((x << 32) | z).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
