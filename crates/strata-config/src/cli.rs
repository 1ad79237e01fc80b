//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `strata.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Region snapshots over a chunked voxel world")]
pub struct CliArgs {
    /// Chunk-fetch padding around each query, in cells.
    #[arg(long)]
    pub padding: Option<u32>,

    /// World generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// World radius in chunk columns.
    #[arg(long)]
    pub radius: Option<u32>,

    /// Log filter (error, warn, info, debug, trace, or a full directive list).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(padding) = args.padding {
            self.snapshot.padding = padding;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(radius) = args.radius {
            self.world.radius_chunks = radius;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
