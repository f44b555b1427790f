//! Application-wide constants.

/// Registry file name, resolved relative to the root directory.
pub const MODULES_FILE: &str = "modules.json";

/// Progress bar tick interval in milliseconds.
/// Controls how often the spinner/bar animates.
pub const PROGRESS_TICK_MS: u64 = 80;
