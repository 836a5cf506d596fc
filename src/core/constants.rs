//! Defaults and fixed layout widths.

/// Report width when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 80;
/// Number of histogram rows when nothing else is configured.
pub const DEFAULT_HEIGHT: usize = 15;

/// Qualifying increments between two prune passes.
pub const DEFAULT_PRUNE_INTERVAL: u64 = 1_500_000;
/// Keys retained by a prune pass.
pub const DEFAULT_MAX_KEYS: usize = 5000;
/// `max_keys` is raised to at least `height + KEY_MARGIN`.
///
/// Keeps sparse but eventually heavy keys from being pruned before they matter.
pub const KEY_MARGIN: usize = 3000;

/// regular, key, count, percent, graph
pub const DEFAULT_PALETTE: &str = "0,0,32,35,34";

/// Seconds between verbose progress lines.
pub const STAT_INTERVAL_SECS: u64 = 1;

/// Numeric mode: percent column plus its trailing space.
pub const SERIES_FIXED_COLUMNS: usize = SERIES_PCT_WIDTH + 1;
/// Width of the `(xx.xx%)` column in numeric mode.
pub const SERIES_PCT_WIDTH: usize = 9;

/// `--size=full` never goes below this.
pub const MIN_FULL_WIDTH: usize = 40;
/// `--size=full` never goes below this.
pub const MIN_FULL_HEIGHT: usize = 10;
