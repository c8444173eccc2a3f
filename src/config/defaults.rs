//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Infile
// ============================================================================

/// Longest physical line SOG's Fortran input processor reads (characters).
pub const MAX_INFILE_LINE_LEN: usize = 240;

/// Suffix of temporary infiles written for a run.
pub const TEMP_INFILE_SUFFIX: &str = ".infile";

/// Suffix appended to an infile name to derive its outfile name.
pub const OUTFILE_SUFFIX: &str = ".out";

// ============================================================================
// Runs
// ============================================================================

/// Niceness the simulator runs at unless a job says otherwise.
pub const DEFAULT_NICE: i32 = 19;

/// Range `nice -n` accepts.
pub const NICE_RANGE: std::ops::RangeInclusive<i32> = -20..=19;

/// How often `--watch` checks the outfile for new lines (ms).
pub const WATCH_INTERVAL_MS: u64 = 100;

// ============================================================================
// Batch
// ============================================================================

/// How often the batch scheduler polls running jobs (ms).
///
/// SOG runs take minutes to hours, so 5 s is plenty.
pub const BATCH_POLL_INTERVAL_MS: u64 = 5_000;

/// Jobs run one at a time unless the batch file says otherwise.
pub const DEFAULT_MAX_CONCURRENT_JOBS: usize = 1;

// ============================================================================
// Config validation
// ============================================================================

/// Largest edit distance for a "did you mean" suggestion.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;
