//! # Stream Chains
//!
//! A chain is one to three layers built outward from a raw file stream:
//! `raw`, then `cipher` if encryption is enabled, then `compression` if
//! compression is enabled. Each layer exclusively owns the layer beneath it
//! and the caller holds only the outermost handle.
//!
//! On the write side, ownership is expressed through [`WriteLayer`]: closing
//! consumes the boxed layer, finalizes it, then closes the layer it owns.
//! Since `close` takes `self: Box<Self>`, every layer is closed at most once.
//! A layer dropped on an error path is still released by its normal `Drop`,
//! so the raw file handle is never leaked.

use crate::error::DecoratorError;
use std::fmt;
use std::io::{self, Read, Write};
use tracing::warn;

/// One logical layer of a stream chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Raw,
    Cipher,
    Compression,
}

/// A writable layer that owns everything beneath it.
pub trait WriteLayer: Write + Send {
    /// Finalize this layer (final cipher block, compressor trailer), then
    /// close the owned inner layer.
    ///
    /// The inner layer is closed even if finalizing this one fails; the
    /// first error is returned.
    fn close(self: Box<Self>) -> Result<(), DecoratorError>;
}

/// Writable end of a stream chain. Write plaintext here.
///
/// Call [`WriteStream::close`] when done. Dropping an unclosed stream closes
/// it on a best-effort basis and logs any failure, since `Drop` cannot
/// return one.
pub struct WriteStream {
    outer: Option<Box<dyn WriteLayer>>,
    layers: Vec<LayerKind>,
}

impl WriteStream {
    pub(crate) fn new(outer: Box<dyn WriteLayer>, layers: Vec<LayerKind>) -> Self {
        Self {
            outer: Some(outer),
            layers,
        }
    }

    /// Layers of this chain, innermost first.
    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    /// Close the chain, outermost layer first.
    ///
    /// The final padded cipher block and the compressor trailer are written
    /// before the file is flushed and closed.
    pub fn close(mut self) -> Result<(), DecoratorError> {
        match self.outer.take() {
            Some(outer) => outer.close(),
            None => Ok(()),
        }
    }

    fn outer_mut(&mut self) -> io::Result<&mut Box<dyn WriteLayer>> {
        self.outer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "stream already closed"))
    }
}

impl Write for WriteStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.outer_mut()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.outer_mut()?.flush()
    }
}

impl Drop for WriteStream {
    fn drop(&mut self) {
        if let Some(outer) = self.outer.take() {
            if let Err(e) = outer.close() {
                warn!(error = %e, "closing dropped write stream failed");
            }
        }
    }
}

impl fmt::Debug for WriteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteStream")
            .field("layers", &self.layers)
            .field("open", &self.outer.is_some())
            .finish()
    }
}

/// Readable end of a stream chain. Read plaintext here.
///
/// Dropping the stream, or calling [`ReadStream::close`], releases every
/// layer and the underlying file.
pub struct ReadStream {
    source: Box<dyn Read + Send>,
    layers: Vec<LayerKind>,
}

impl ReadStream {
    pub(crate) fn new(source: Box<dyn Read + Send>, layers: Vec<LayerKind>) -> Self {
        Self { source, layers }
    }

    /// Layers of this chain, innermost first.
    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    /// Read the remaining plaintext to the end.
    pub fn read_plaintext(&mut self) -> Result<Vec<u8>, DecoratorError> {
        let mut plaintext = Vec::new();
        self.source.read_to_end(&mut plaintext)?;
        Ok(plaintext)
    }

    /// Read the remaining plaintext as UTF-8 text and close the chain.
    pub fn read_text(mut self) -> Result<String, DecoratorError> {
        let plaintext = self.read_plaintext()?;
        String::from_utf8(plaintext)
            .map_err(|e| DecoratorError::DataFormat(format!("plaintext is not valid UTF-8: {e}")))
    }

    /// Release the chain.
    pub fn close(self) {
        drop(self);
    }
}

impl Read for ReadStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.source.read(buf)
    }
}

impl fmt::Debug for ReadStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadStream")
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}
