//! src/encryptor/write.rs
//! Raw file sink at the bottom of every write chain

use crate::chain::WriteLayer;
use crate::error::DecoratorError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered, exclusively owned destination file.
pub struct RawSink {
    writer: BufWriter<File>,
}

impl RawSink {
    /// Create `path`, truncating any existing file.
    #[inline]
    pub fn create(path: &Path) -> Result<Self, DecoratorError> {
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl Write for RawSink {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl WriteLayer for RawSink {
    fn close(self: Box<Self>) -> Result<(), DecoratorError> {
        let file = self.writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}
