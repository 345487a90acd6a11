//! How the writer obtains a file handle for a path

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Opens a file for writing from scratch.
///
/// Implementations make a single attempt; retrying is the writer's job.
pub trait Opener: Send {
    /// Open `path` for writing, creating it if needed and truncating any
    /// existing content.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the file cannot be opened.
    fn open_truncate(&self, path: &Path) -> io::Result<File>;
}

/// Opens files on the local filesystem in create-or-truncate mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct TruncatingOpener;

impl Opener for TruncatingOpener {
    fn open_truncate(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
    }
}
