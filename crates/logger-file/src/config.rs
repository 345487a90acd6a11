//! Configuration for the log file writer

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of open attempts before giving up
pub const DEFAULT_OPEN_TRIES: usize = 5;

/// Default pause between open attempts
pub const DEFAULT_OPEN_INTERVAL: Duration = Duration::from_millis(10);

/// Configuration for a [`FileWriter`](crate::FileWriter)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWriterConfig {
    /// Force every write through to durable storage (default: false)
    pub auto_flush: bool,
    /// Maximum number of open attempts (default: 5)
    pub open_tries: usize,
    /// Delay between open attempts (default: 10ms)
    pub open_interval: Duration,
}

impl Default for FileWriterConfig {
    fn default() -> Self {
        Self {
            auto_flush: false,
            open_tries: DEFAULT_OPEN_TRIES,
            open_interval: DEFAULT_OPEN_INTERVAL,
        }
    }
}

impl FileWriterConfig {
    /// Create a new configuration builder
    #[must_use]
    pub fn builder() -> FileWriterConfigBuilder {
        FileWriterConfigBuilder::default()
    }

    /// Number of attempts `open` makes, never less than one
    pub(crate) fn attempts(&self) -> usize {
        self.open_tries.max(1)
    }
}

/// Builder for [`FileWriterConfig`]
#[derive(Debug, Default)]
pub struct FileWriterConfigBuilder {
    config: FileWriterConfig,
}

impl FileWriterConfigBuilder {
    /// Set whether each write is forced to durable storage
    #[must_use]
    pub const fn auto_flush(mut self, auto_flush: bool) -> Self {
        self.config.auto_flush = auto_flush;
        self
    }

    /// Set the maximum number of open attempts
    ///
    /// Zero is treated as one: an open is always attempted at least once.
    #[must_use]
    pub const fn open_tries(mut self, tries: usize) -> Self {
        self.config.open_tries = tries;
        self
    }

    /// Set the delay between open attempts
    #[must_use]
    pub const fn open_interval(mut self, interval: Duration) -> Self {
        self.config.open_interval = interval;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> FileWriterConfig {
        self.config
    }
}
