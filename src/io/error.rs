//! Error types for puzzle generation, word fetching and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Grid coordinates outside `[0, size)`
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid side length
        size: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A single word request failed at the transport or protocol level
    Transport {
        /// Stage of the request that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The word source failed on every attempt of a batch
    FetchFailed {
        /// Number of attempts made
        attempts: usize,
        /// Description of the last failure
        reason: String,
    },

    /// Word does not fit inside the grid margin
    WordTooLong {
        /// Normalized word
        word: String,
        /// Word length in letters
        length: usize,
        /// Longest accepted length
        max_length: usize,
    },

    /// No conflict-free placement found within the try budget
    PlacementExhausted {
        /// Normalized word
        word: String,
        /// Attempts made
        tries: usize,
    },

    /// Dropped words and failed fetches reached the ceiling
    TotalErrorBudgetExceeded {
        /// Errors counted so far
        errors: usize,
        /// Configured ceiling
        limit: usize,
    },

    /// Failed to write the run log
    LogWriteFailed {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system or stream failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PuzzleError {
    /// Whether the error aborts the whole run rather than a single word
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::WordTooLong { .. } | Self::PlacementExhausted { .. } | Self::Transport { .. }
        )
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, size } => {
                write!(f, "Cell ({row}, {col}) is outside the {size}x{size} grid")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Transport { operation, reason } => {
                write!(f, "Word request failed during {operation}: {reason}")
            }
            Self::FetchFailed { attempts, reason } => {
                write!(
                    f,
                    "Failed to get words from server after {attempts} attempts: {reason}"
                )
            }
            Self::WordTooLong {
                word,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Word '{word}' exceeded max length ({length} > {max_length})"
                )
            }
            Self::PlacementExhausted { word, tries } => {
                write!(f, "Unable to find a place for '{word}' after {tries} tries")
            }
            Self::TotalErrorBudgetExceeded { errors, limit } => {
                write!(f, "Too many errors ({errors} of {limit} allowed); giving up")
            }
            Self::LogWriteFailed { path, source } => {
                write!(f, "Failed to write log '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogWriteFailed { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stream>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a transport error for one failed word request
pub fn transport_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Transport {
        operation,
        reason: reason.to_string(),
    }
}
