//! Zlib (DEFLATE) compression layers via flate2.
//!
//! The write layer compresses at [`Compression::best`] into a scratch buffer
//! and forwards the output to the layer it owns, so closing can always reach
//! that layer even when finishing the stream fails. A failed forward poisons
//! the layer: later writes are rejected and close only releases the inner
//! layer.
//!
//! The read layer inflates. Corrupt, truncated or non-zlib input surfaces as
//! [`DecoratorError::DataFormat`], unless the layer underneath fails once it
//! is read to the end, in which case that error wins: a cipher layer fed the
//! wrong key hands garbage to the decoder long before it reaches the padding
//! that proves the key wrong. The inner layer is also read to the end after
//! the zlib stream finishes, so its final checks always run.

use crate::chain::WriteLayer;
use crate::error::DecoratorError;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

pub struct DeflateWriter {
    encoder: ZlibEncoder<Vec<u8>>,
    inner: Box<dyn WriteLayer>,
    failed: bool,
}

impl DeflateWriter {
    pub fn new(inner: Box<dyn WriteLayer>) -> Self {
        Self {
            encoder: ZlibEncoder::new(Vec::new(), Compression::best()),
            inner,
            failed: false,
        }
    }

    /// Hand whatever the encoder produced so far to the inner layer.
    fn forward(&mut self) -> io::Result<()> {
        let compressed = self.encoder.get_mut();
        if compressed.is_empty() {
            return Ok(());
        }
        if let Err(e) = self.inner.write_all(compressed) {
            self.failed = true;
            return Err(e);
        }
        compressed.clear();
        Ok(())
    }

    fn check_usable(&self) -> io::Result<()> {
        if self.failed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "compression layer is unusable after a failed write",
            ));
        }
        Ok(())
    }
}

impl Write for DeflateWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_usable()?;
        let n = self.encoder.write(buf)?;
        self.forward()?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check_usable()?;
        self.encoder.flush()?;
        self.forward()?;
        self.inner.flush()
    }
}

impl WriteLayer for DeflateWriter {
    fn close(self: Box<Self>) -> Result<(), DecoratorError> {
        let mut this = *self;
        let finished = this
            .check_usable()
            .and_then(|()| this.encoder.try_finish())
            .and_then(|()| this.forward())
            .map_err(DecoratorError::from);
        let closed = this.inner.close();
        finished.and(closed)
    }
}

pub struct InflateReader<R: Read> {
    decoder: ZlibDecoder<R>,
}

impl<R: Read> InflateReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            decoder: ZlibDecoder::new(inner),
        }
    }

    /// Read the inner layer to its end, surfacing any error it raises there.
    fn drain_inner(&mut self) -> io::Result<()> {
        io::copy(self.decoder.get_mut(), &mut io::sink()).map(|_| ())
    }
}

impl<R: Read> Read for InflateReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.decoder.read(buf) {
            Ok(0) if !buf.is_empty() => {
                self.drain_inner()?;
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) if DecoratorError::is_carried_by(&e) => Err(e),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::InvalidInput
                        | io::ErrorKind::InvalidData
                        | io::ErrorKind::UnexpectedEof
                ) =>
            {
                self.drain_inner()?;
                Err(DecoratorError::DataFormat(format!("invalid compressed stream: {e}")).into())
            }
            Err(e) => Err(e),
        }
    }
}
