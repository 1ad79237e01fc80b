//! Structured logging setup for Strata binaries.
//!
//! Library crates only emit `tracing` events; this crate installs the
//! subscriber. Console output carries uptime, target, and level. Debug builds
//! can additionally write JSON lines to a file for post-mortem analysis of
//! snapshot misses and out-of-range reads.

use std::path::{Path, PathBuf};

use strata_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provides one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE_NAME: &str = "strata.log";

/// Resolves the filter string: a non-empty config `log_level` wins over
/// [`DEFAULT_FILTER`]. `RUST_LOG` is applied later and wins over both.
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Where the JSON log goes, or `None` if file logging is off for this run.
pub fn log_file_path(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<PathBuf> {
    let enabled = config.is_none_or(|c| c.debug.file_logging);
    match log_dir {
        Some(dir) if debug_build && enabled => Some(dir.join(LOG_FILE_NAME)),
        _ => None,
    }
}

/// Installs the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - whether this is a debug build
/// * `config` - optional configuration supplying the filter and file toggle
///
/// Must be called at most once per process.
///
/// ```no_run
/// use strata_config::Config;
///
/// let config = Config::default();
/// strata_log::init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_path) = log_file_path(log_dir, debug_build, config)
        && let Some(dir) = log_path.parent()
        && std::fs::create_dir_all(dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(&log_path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}
