//! Retrying writer that owns a single log file handle

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf, is_separator};
use std::thread;

use tracing::{debug, trace};

use crate::config::FileWriterConfig;
use crate::error::{Error, Result};
use crate::opener::{Opener, TruncatingOpener};
use crate::record::FormattedRecord;

/// Writes formatted log records to a single file.
///
/// Opening retries a few times with a short pause to ride out transient
/// contention (virus scanners, a rotating process still holding the file).
/// Every open truncates: the writer always starts the file from scratch.
///
/// The writer holds at most one handle. It is released by [`close`],
/// by opening another file, or when the writer is dropped.
///
/// [`close`]: FileWriter::close
#[derive(Debug)]
pub struct FileWriter<O: Opener = TruncatingOpener> {
    file: Option<File>,
    path: PathBuf,
    config: FileWriterConfig,
    opener: O,
}

impl FileWriter {
    /// Create a writer with the default open policy (5 tries, 10ms apart).
    #[must_use]
    pub fn new(auto_flush: bool) -> Self {
        Self::with_config(FileWriterConfig::builder().auto_flush(auto_flush).build())
    }

    /// Create a writer from an explicit configuration.
    #[must_use]
    pub fn with_config(config: FileWriterConfig) -> Self {
        Self::with_opener(config, TruncatingOpener)
    }

    /// Check whether `path` can be opened for reading.
    ///
    /// Missing and inaccessible paths both report `false`.
    #[must_use]
    pub fn file_exists(path: impl AsRef<Path>) -> bool {
        File::open(path).is_ok()
    }

    /// Split a file name into its base name and extension.
    ///
    /// The extension keeps its leading dot. Hidden files (`.mylog`), names
    /// ending in a dot, and dots inside directory components do not count as
    /// extensions.
    ///
    /// ```
    /// use proven_logger_file::FileWriter;
    ///
    /// assert_eq!(FileWriter::split_by_extension("logs/app.log"), ("logs/app", ".log"));
    /// assert_eq!(FileWriter::split_by_extension("logs/.app"), ("logs/.app", ""));
    /// ```
    #[must_use]
    pub fn split_by_extension(name: &str) -> (&str, &str) {
        let Some(ext_index) = name.rfind('.') else {
            return (name, "");
        };

        if ext_index == 0 || ext_index == name.len() - 1 {
            return (name, "");
        }

        if let Some(folder_index) = name.rfind(is_separator)
            && folder_index + 1 >= ext_index
        {
            return (name, "");
        }

        name.split_at(ext_index)
    }
}

impl<O: Opener> FileWriter<O> {
    /// Create a writer that obtains its handles through `opener`.
    #[must_use]
    pub fn with_opener(config: FileWriterConfig, opener: O) -> Self {
        Self {
            file: None,
            path: PathBuf::new(),
            config,
            opener,
        }
    }

    /// Open `path` for writing, truncating any existing content.
    ///
    /// Any previously open file is closed first. The path is recorded even if
    /// every attempt fails, so a later [`reopen`](Self::reopen) targets it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] once the configured number of attempts
    /// have all failed.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.close();
        self.path = path.as_ref().to_path_buf();
        self.open_recorded()
    }

    /// Open the last recorded path again, truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPriorPath`] if no path was ever recorded, otherwise
    /// the same errors as [`open`](Self::open).
    pub fn reopen(&mut self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::NoPriorPath);
        }

        self.close();
        self.open_recorded()
    }

    fn open_recorded(&mut self) -> Result<()> {
        let attempts = self.config.attempts();
        let mut attempt = 1;

        loop {
            match self.opener.open_truncate(&self.path) {
                Ok(file) => {
                    debug!(path = %self.path.display(), attempt, "opened log file");
                    self.file = Some(file);
                    return Ok(());
                }
                Err(source) if attempt >= attempts => {
                    return Err(Error::FileOpen {
                        path: self.path.clone(),
                        attempts,
                        source,
                    });
                }
                Err(e) => {
                    trace!(path = %self.path.display(), attempt, error = %e, "open failed, retrying");
                    thread::sleep(self.config.open_interval);
                    attempt += 1;
                }
            }
        }
    }

    /// Write one formatted record.
    ///
    /// The payload is written in full or the call fails. With `auto_flush`
    /// enabled the data is forced to storage before returning.
    ///
    /// # Errors
    ///
    /// - [`Error::NotOpen`] if no file is open.
    /// - [`Error::Write`] if the payload could not be written in full.
    /// - [`Error::Flush`] if `auto_flush` is on and syncing failed.
    pub fn write<R: FormattedRecord + ?Sized>(&mut self, record: &R) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(|| Error::NotOpen {
            path: self.path.clone(),
        })?;

        file.write_all(record.payload())
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })?;

        if self.config.auto_flush {
            sync(file, &self.path)?;
        }

        Ok(())
    }

    /// Flush the open file and force its data to storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOpen`] if no file is open, or [`Error::Flush`] if
    /// the sync fails.
    pub fn flush(&mut self) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(|| Error::NotOpen {
            path: self.path.clone(),
        })?;

        sync(file, &self.path)
    }

    /// Current size of the open file in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOpen`] if no file is open, or [`Error::Size`] if
    /// the metadata query fails.
    pub fn size(&self) -> Result<u64> {
        let file = self.file.as_ref().ok_or_else(|| Error::NotOpen {
            path: self.path.clone(),
        })?;

        file.metadata()
            .map(|metadata| metadata.len())
            .map_err(|source| Error::Size {
                path: self.path.clone(),
                source,
            })
    }

    /// Close the file if one is open. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            trace!(path = %self.path.display(), "closed log file");
        }
    }

    /// The last recorded path; empty if `open` was never called.
    #[must_use]
    pub fn filename(&self) -> &Path {
        &self.path
    }

    /// Whether a file is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Whether every write is forced to storage.
    #[must_use]
    pub const fn auto_flush(&self) -> bool {
        self.config.auto_flush
    }
}

impl<O: Opener> Drop for FileWriter<O> {
    fn drop(&mut self) {
        self.close();
    }
}

fn sync(file: &mut File, path: &Path) -> Result<()> {
    file.flush()
        .and_then(|()| file.sync_data())
        .map_err(|source| Error::Flush {
            path: path.to_path_buf(),
            source,
        })?;

    trace!(path = %path.display(), "synced log file");
    Ok(())
}
