//! Input contract for already-formatted log records

use bytes::Bytes;

/// A log record that has already been rendered to bytes.
///
/// The writer only needs a contiguous payload; it never parses or changes it.
pub trait FormattedRecord {
    /// The formatted bytes to write
    fn payload(&self) -> &[u8];

    /// Length of the payload in bytes
    fn len(&self) -> usize {
        self.payload().len()
    }

    /// Whether the payload is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FormattedRecord for [u8] {
    fn payload(&self) -> &[u8] {
        self
    }
}

impl FormattedRecord for Vec<u8> {
    fn payload(&self) -> &[u8] {
        self
    }
}

impl FormattedRecord for str {
    fn payload(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl FormattedRecord for String {
    fn payload(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl FormattedRecord for Bytes {
    fn payload(&self) -> &[u8] {
        self
    }
}

impl<T: FormattedRecord + ?Sized> FormattedRecord for &T {
    fn payload(&self) -> &[u8] {
        (**self).payload()
    }
}
