//! Error types for the log file writer

use std::io;
use std::path::PathBuf;

/// Result type for file writer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while writing log files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened before the retry budget ran out
    #[error("Failed opening file {} for writing after {attempts} attempts: {source}", .path.display())]
    FileOpen {
        /// The path that failed to open
        path: PathBuf,
        /// How many open attempts were made
        attempts: usize,
        /// The error from the final attempt
        source: io::Error,
    },

    /// `reopen` was called before any path was recorded
    #[error("Failed re-opening file: was not opened before")]
    NoPriorPath,

    /// A record was not written in full
    #[error("Failed writing to file {}: {source}", .path.display())]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// An operation that needs an open handle was called while closed
    #[error("File {} is not open", .path.display())]
    NotOpen {
        /// The last recorded path (may be empty)
        path: PathBuf,
    },

    /// Flushing to durable storage failed
    #[error("Failed flushing file {}: {source}", .path.display())]
    Flush {
        /// The file being flushed
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Reading the file size failed
    #[error("Failed reading size of file {}: {source}", .path.display())]
    Size {
        /// The file being queried
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}
