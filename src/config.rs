/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit status when every case passed.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when at least one case failed or errored.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for an invalid command line or suite file.
pub const EXIT_USAGE: u8 = 2;

/// Exit status when the results could not be written.
pub const EXIT_OUTPUT_ERROR: u8 = 3;

/// Key holding the case list when a suite file is an object.
pub const SUITE_CASES_KEY: &str = "cases";

/// Number of decimals printed for the elapsed time.
pub const ELAPSED_PRECISION: usize = 3;
