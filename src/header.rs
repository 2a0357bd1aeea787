//! # Header
//!
//! Encrypted files start with a fixed 32-byte plaintext header:
//!
//! ```text
//! [salt: 16 bytes][iv: 16 bytes][ciphertext ...]
//! ```
//!
//! Both fields are fresh random values for every write. The salt feeds the
//! key derivation and the IV seeds CBC chaining, so a reader holding the
//! password can rebuild the cipher without any key material on disk.
//! Unencrypted files carry no header at all.

use crate::aliases::{Iv16, Salt16};
use crate::consts::{IV_LEN, SALT_LEN};
use crate::crypto::rng::SecureRandomExt;
use crate::decryptor::read::read_header_field;
use crate::error::DecoratorError;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::trace;

/// The `salt || iv` prefix of an encrypted file.
pub struct Header {
    salt: Salt16,
    iv: Iv16,
}

impl Header {
    /// Build a header from known values.
    pub fn new(salt: [u8; SALT_LEN], iv: [u8; IV_LEN]) -> Self {
        Self {
            salt: Salt16::new(salt),
            iv: Iv16::new(iv),
        }
    }

    /// Draw a fresh salt and IV from the OS random source.
    pub fn generate() -> Result<Self, DecoratorError> {
        Ok(Self {
            salt: Salt16::random()?,
            iv: Iv16::random()?,
        })
    }

    #[inline]
    pub fn salt(&self) -> &Salt16 {
        &self.salt
    }

    #[inline]
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }

    /// Write `salt` then `iv` and flush, so the header is laid out before any
    /// ciphertext reaches `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DecoratorError> {
        writer.write_all(self.salt.expose_secret())?;
        writer.write_all(self.iv.expose_secret())?;
        writer.flush()?;
        trace!(len = SALT_LEN + IV_LEN, "header written");
        Ok(())
    }

    /// Read `salt` then `iv`.
    ///
    /// A short read on either field yields
    /// [`DecoratorError::CorruptedHeader`] naming the field.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, DecoratorError> {
        let salt = Salt16::new(read_header_field(reader, "salt")?);
        let iv = Iv16::new(read_header_field(reader, "iv")?);
        trace!(len = SALT_LEN + IV_LEN, "header read");
        Ok(Self { salt, iv })
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("salt_len", &SALT_LEN)
            .field("iv_len", &IV_LEN)
            .finish_non_exhaustive()
    }
}

/// Read the header of an encrypted file without a password.
///
/// Useful to check that a file is long enough to be opened with encryption
/// enabled. The file is closed before returning.
///
/// # Errors
///
/// - [`DecoratorError::Io`] - the file cannot be opened or read
/// - [`DecoratorError::CorruptedHeader`] - the file is shorter than the header
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Header, DecoratorError> {
    let mut reader = BufReader::new(File::open(path)?);
    Header::read_from(&mut reader)
}
