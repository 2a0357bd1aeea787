//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, DecoratorError>`](DecoratorError).
//!
//! The stream layers implement [`std::io::Read`] and [`std::io::Write`], so a
//! cryptographic or format failure raised deep inside a chain has to travel
//! through [`io::Error`]. It does so as the error payload (kind
//! [`io::ErrorKind::InvalidData`]), and the [`From<io::Error>`] conversion
//! below unwraps it again, so `?` at the caller always yields the original
//! variant.

use std::io;
use thiserror::Error;

/// The error type for all stream decoration operations.
#[derive(Error, Debug)]
pub enum DecoratorError {
    /// Invalid configuration, detected before any I/O happens.
    ///
    /// Raised when encryption is requested without a password, when the KDF
    /// iteration count is out of range, or when a zero-length key is requested.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error from the underlying file (not found, permission, disk full).
    ///
    /// Surfaced verbatim and never retried.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    /// The file ended before the named header field could be read in full.
    ///
    /// `field` is either `"salt"` or `"iv"`.
    #[error("Corrupted header: not enough bytes for {field}")]
    CorruptedHeader { field: &'static str },

    /// Cryptographic operation failed.
    ///
    /// Invalid PKCS#7 padding on the final block, ciphertext that is not a
    /// whole number of blocks, or a failing KDF / random source. A wrong
    /// password and a truncated ciphertext are indistinguishable here.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The decompression layer was fed data that is not a valid zlib stream,
    /// or the decoded plaintext is not valid UTF-8 when a string was requested.
    #[error("Data format error: {0}")]
    DataFormat(String),
}

impl DecoratorError {
    /// Returns `true` if `err` is carrying a [`DecoratorError`] payload.
    pub(crate) fn is_carried_by(err: &io::Error) -> bool {
        err.get_ref()
            .is_some_and(|inner| inner.is::<DecoratorError>())
    }
}

impl From<io::Error> for DecoratorError {
    fn from(err: io::Error) -> Self {
        if !Self::is_carried_by(&err) {
            return DecoratorError::Io(err);
        }
        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<DecoratorError>()) {
            Some(Ok(decorated)) => *decorated,
            Some(Err(other)) => DecoratorError::Io(io::Error::new(kind, other)),
            None => DecoratorError::Io(io::Error::from(kind)),
        }
    }
}

impl From<DecoratorError> for io::Error {
    fn from(err: DecoratorError) -> Self {
        match err {
            DecoratorError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl From<&'static str> for DecoratorError {
    fn from(msg: &'static str) -> Self {
        DecoratorError::Crypto(msg.to_string())
    }
}
