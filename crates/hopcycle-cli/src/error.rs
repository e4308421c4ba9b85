/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `hopcycle` binary. Every
/// variant is an input failure: the tool could not open, read or parse the
/// hop stream. Input failures exit with code **2** via
/// [`CliError::exit_code`], and nothing is written to stdout.
///
/// A run that finds no cycle is not an error: it prints the "no longest
/// cycle" message and exits 0.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `hopcycle` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// A line of the input is not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// 1-based number of the offending line.
        line: usize,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A line did not parse into a hop record.
    ///
    /// The run aborts at the first malformed line; no result is printed.
    MalformedRecord {
        /// A human-readable label for the source.
        source: String,
        /// 1-based number of the offending line.
        line: usize,
        /// The parser's description of the problem.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// Every variant is an input failure and maps to `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. }
            | Self::MalformedRecord { .. } => 2,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::InvalidUtf8 { source, line } => {
                format!("error: invalid UTF-8 in {source} at line {line}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::MalformedRecord {
                source,
                line,
                detail,
            } => {
                format!("error: malformed record in {source} at line {line}: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
