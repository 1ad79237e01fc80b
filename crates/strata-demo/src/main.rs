//! Demo binary that builds a seeded world and requests region snapshots.
//!
//! Configuration is loaded from `strata.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p strata-demo`, or e.g.
//! `cargo run -p strata-demo -- --padding 16 --log-level debug`.

mod terrain;

use clap::Parser;
use glam::IVec3;
use strata_config::{CliArgs, Config};
use strata_coords::{CHUNK_EDGE, CellBox, ChunkCoord};
use strata_snapshot::{RegionSnapshot, SnapshotResult, VoxelReader};
use strata_voxel::ChunkStore;
use tracing::{info, warn};

/// Counts solid cells of `cells` whose upward neighbor is air, the way a
/// mesher decides whether to emit a top face.
fn count_exposed_tops<R: VoxelReader>(reader: &R, cells: CellBox) -> usize {
    cells
        .iter()
        .filter(|&pos| !reader.voxel_at(pos).is_air() && reader.voxel_at(pos + IVec3::Y).is_air())
        .count()
}

/// Requests a snapshot and logs the outcome.
fn request(
    store: &ChunkStore,
    label: &str,
    from: IVec3,
    to: IVec3,
    padding: u32,
) -> SnapshotResult {
    let result = RegionSnapshot::try_create(store, from, to, padding);
    match &result {
        SnapshotResult::Ready(snapshot) => {
            // Faces are only counted inside the query; the border supplies neighbors.
            let tops = count_exposed_tops(snapshot, CellBox::new(from, to));
            info!(
                "[{label}] ready: origin {:?}, size {:?}, {} columns fetched, {} exposed tops",
                snapshot.origin(),
                snapshot.size(),
                snapshot.chunk_rect().len(),
                tops
            );
        }
        SnapshotResult::NotReady => {
            info!("[{label}] not ready: required columns missing, retry later");
        }
    }
    result
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join("strata")))
        .unwrap_or_else(|| std::path::PathBuf::from(".strata"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    strata_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let padding = config.snapshot.padding;
    let mut store = terrain::generate_world(&config.world);
    let surface = terrain::base_surface(&config.world);

    // A query well inside column (0, 0).
    let from = IVec3::new(2, surface - 2, 2);
    let to = IVec3::new(12, surface + 4, 12);
    let ready = request(&store, "inside", from, to, padding);

    // Check the snapshot against direct world reads.
    if let Some(snapshot) = ready.ready() {
        let mismatches = snapshot
            .bounds()
            .iter()
            .filter(|&pos| snapshot.voxel_at(pos) != store.voxel_at(pos))
            .count();
        info!("[inside] {mismatches} mismatches against direct reads");

        let outside = snapshot.origin() - IVec3::ONE;
        let voxel = snapshot.voxel_at(outside);
        info!("[inside] out-of-range read at {outside:?} returned {voxel:?}");
    }

    // Unload the +X neighbor; a query whose border crosses into it must wait.
    let hole = ChunkCoord::new(1, 0);
    if !store.is_loaded(hole) {
        warn!("Column {hole:?} is outside the world; skipping the missing-column scenario");
        return;
    }
    let Some(unloaded) = store.unload_chunk(hole) else {
        return;
    };
    let edge_from = IVec3::new(CHUNK_EDGE - 6, surface - 2, 2);
    let edge_to = IVec3::new(CHUNK_EDGE - 1, surface + 4, 8);
    let pending = request(&store, "edge, hole", edge_from, edge_to, padding);
    if pending.is_ready() {
        warn!("Column {hole:?} was unloaded but the edge query still built");
    }

    // Once the column is resident again the same request succeeds.
    store.load_chunk(unloaded);
    let retried = request(&store, "edge, reloaded", edge_from, edge_to, padding);
    if !retried.is_ready() {
        warn!("Column {hole:?} was reloaded but the edge query is still not ready");
    }
}
