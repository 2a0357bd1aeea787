//! # Stream Decorator Factory
//!
//! Builds write and read chains around a file:
//!
//! ```text
//! write:  compression? -> cipher? -> raw file      (caller writes plaintext)
//! read:   compression? <- cipher? <- raw file      (caller reads plaintext)
//! ```
//!
//! When encryption is enabled the raw file starts with the 32-byte
//! [`Header`], written before any ciphertext and read before the cipher
//! layer is built. Every validation happens before the file is touched, and
//! a chain that fails half-way through construction drops the layers built
//! so far, closing the file.
//!
//! # Example
//!
//! ```no_run
//! use notecrypt::aliases::PasswordString;
//! use notecrypt::{StreamDecoratorFactory, StreamOptions};
//!
//! let factory = StreamDecoratorFactory::new(StreamOptions::new(true, true));
//! let password = PasswordString::new("hunter2".to_string());
//!
//! factory.write_text("note.txt", "remember the milk", Some(&password))?;
//! let text = factory.read_text("note.txt", Some(&password))?;
//! assert_eq!(text, "remember the milk");
//! # Ok::<(), notecrypt::DecoratorError>(())
//! ```

use crate::aliases::PasswordString;
use crate::chain::{LayerKind, ReadStream, WriteLayer, WriteStream};
use crate::compression::{DeflateWriter, InflateReader};
use crate::config::StreamOptions;
use crate::crypto::kdf::pbkdf2::derive_stream_key;
use crate::decryptor::read::open_raw_source;
use crate::decryptor::stream::CbcDecryptReader;
use crate::encryptor::stream::CbcEncryptWriter;
use crate::encryptor::write::RawSink;
use crate::error::DecoratorError;
use crate::header::Header;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Builds decorated stream chains for one set of [`StreamOptions`].
///
/// # Thread Safety
///
/// The factory holds no mutable state. Chains for independent paths can be
/// opened concurrently from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamDecoratorFactory {
    options: StreamOptions,
}

impl StreamDecoratorFactory {
    #[must_use]
    pub fn new(options: StreamOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &StreamOptions {
        &self.options
    }

    /// Create (or truncate) `path` and return the plaintext end of a write chain.
    ///
    /// # Errors
    ///
    /// - [`DecoratorError::Configuration`] - encryption without a password; no file is created
    /// - [`DecoratorError::Io`] - the file cannot be created or the header cannot be written
    /// - [`DecoratorError::Crypto`] - the random source or key derivation failed
    pub fn open_write<P: AsRef<Path>>(
        &self,
        path: P,
        password: Option<&PasswordString>,
    ) -> Result<WriteStream, DecoratorError> {
        let password = self.options.validate(password)?;
        let header = match password {
            Some(_) => Some(Header::generate()?),
            None => None,
        };
        self.build_write_chain(path.as_ref(), password.zip(header))
    }

    /// Open `path` and return the plaintext end of a read chain.
    ///
    /// Padding and compressed-stream errors are only detected while reading,
    /// when the affected bytes are reached.
    ///
    /// # Errors
    ///
    /// - [`DecoratorError::Configuration`] - encryption without a password; the file is not opened
    /// - [`DecoratorError::Io`] - the file cannot be opened
    /// - [`DecoratorError::CorruptedHeader`] - the file is too short for the salt or IV
    ///
    /// Reads from the returned stream may additionally fail with
    /// [`DecoratorError::Crypto`] or [`DecoratorError::DataFormat`].
    pub fn open_read<P: AsRef<Path>>(
        &self,
        path: P,
        password: Option<&PasswordString>,
    ) -> Result<ReadStream, DecoratorError> {
        let password = self.options.validate(password)?;
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            compress = self.options.compress,
            encrypt = self.options.encrypt,
            "opening decorated read stream"
        );

        let mut layers = vec![LayerKind::Raw];
        let mut raw = open_raw_source(path)?;

        let mut source: Box<dyn Read + Send> = match password {
            Some(password) => {
                let header = Header::read_from(&mut raw)?;
                let key = derive_stream_key(password, header.salt(), self.options.kdf_iterations)?;
                layers.push(LayerKind::Cipher);
                Box::new(CbcDecryptReader::new(raw, &key, header.iv()))
            }
            None => Box::new(raw),
        };

        if self.options.compress {
            source = Box::new(InflateReader::new(source));
            layers.push(LayerKind::Compression);
        }

        Ok(ReadStream::new(source, layers))
    }

    /// Write `text` to `path` through a fresh chain and close it.
    pub fn write_text<P: AsRef<Path>>(
        &self,
        path: P,
        text: &str,
        password: Option<&PasswordString>,
    ) -> Result<(), DecoratorError> {
        let mut stream = self.open_write(path, password)?;
        stream.write_all(text.as_bytes())?;
        stream.close()
    }

    /// Read the whole of `path` back as text.
    pub fn read_text<P: AsRef<Path>>(
        &self,
        path: P,
        password: Option<&PasswordString>,
    ) -> Result<String, DecoratorError> {
        self.open_read(path, password)?.read_text()
    }

    /// Write chain with a caller-chosen header; `keying` is `Some` iff encrypting.
    pub(crate) fn build_write_chain(
        &self,
        path: &Path,
        keying: Option<(&PasswordString, Header)>,
    ) -> Result<WriteStream, DecoratorError> {
        debug!(
            path = %path.display(),
            compress = self.options.compress,
            encrypt = keying.is_some(),
            "opening decorated write stream"
        );

        let mut layers = vec![LayerKind::Raw];
        let mut raw = RawSink::create(path)?;

        let mut target: Box<dyn WriteLayer> = match keying {
            Some((password, header)) => {
                header.write_to(&mut raw)?;
                let key = derive_stream_key(password, header.salt(), self.options.kdf_iterations)?;
                layers.push(LayerKind::Cipher);
                Box::new(CbcEncryptWriter::new(Box::new(raw), &key, header.iv()))
            }
            None => Box::new(raw),
        };

        if self.options.compress {
            target = Box::new(DeflateWriter::new(target));
            layers.push(LayerKind::Compression);
        }

        Ok(WriteStream::new(target, layers))
    }
}

/// Create `path` and return a write chain for the given flags.
///
/// `password` is ignored unless `encrypt` is set, in which case it must be
/// non-empty. Uses the default [`PBKDF2_ITERATIONS`](crate::consts::PBKDF2_ITERATIONS).
pub fn open_write_decorated<P: AsRef<Path>>(
    path: P,
    compress: bool,
    encrypt: bool,
    password: &PasswordString,
) -> Result<WriteStream, DecoratorError> {
    StreamDecoratorFactory::new(StreamOptions::new(compress, encrypt)).open_write(path, Some(password))
}

/// Open `path` and return a read chain for the given flags.
///
/// The flags and password must match the ones the file was written with.
pub fn open_read_decorated<P: AsRef<Path>>(
    path: P,
    compress: bool,
    encrypt: bool,
    password: &PasswordString,
) -> Result<ReadStream, DecoratorError> {
    StreamDecoratorFactory::new(StreamOptions::new(compress, encrypt)).open_read(path, Some(password))
}
