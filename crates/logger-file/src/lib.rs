//! File output for the logging pipeline
//!
//! This crate provides the piece of a file sink that touches the disk:
//! - A [`FileWriter`] that owns one file handle at a time
//! - Bounded, blocking retry when opening (5 tries, 10ms apart by default)
//! - Optional flush-to-storage after every record
//! - `reopen` of the current path, the primitive log rotation is built on
//!
//! Formatting records and deciding when to rotate are left to the sink that
//! owns the writer.

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod opener;
mod record;
mod writer;

pub use config::{
    DEFAULT_OPEN_INTERVAL, DEFAULT_OPEN_TRIES, FileWriterConfig, FileWriterConfigBuilder,
};
pub use error::{Error, Result};
pub use opener::{Opener, TruncatingOpener};
pub use record::FormattedRecord;
pub use writer::FileWriter;
