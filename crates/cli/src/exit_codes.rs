//! CLI exit code registry.
//!
//! Single source of truth; scripts rely on these values.
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (unspecified)              |
//! | 2     | Universal | CLI usage error (bad args, missing file) |
//! | 3     | I/O       | Filesystem read/write failure            |
//! | 4     | Parse     | Source table could not be built          |
//! | 50-59 | Fetch     | Source CSV download failures             |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Filesystem failure reading or writing a local file.
pub const EXIT_IO: u8 = 3;

/// The source table failed to parse, normalize, or coerce.
pub const EXIT_PARSE: u8 = 4;

/// Transport failure downloading the source CSV.
pub const EXIT_FETCH_TRANSPORT: u8 = 50;

/// The source host answered with a non-success HTTP status.
pub const EXIT_FETCH_HTTP: u8 = 51;
