//! src/decryptor/read.rs
//! Exact-length reads for the header and block-aligned ciphertext refills

use crate::error::DecoratorError;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Raw source at the bottom of every read chain.
pub type RawSource = BufReader<File>;

/// Open `path` read-only.
#[inline]
pub fn open_raw_source(path: &Path) -> Result<RawSource, DecoratorError> {
    Ok(BufReader::new(File::open(path)?))
}

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// End of file before `N` bytes maps to
/// [`DecoratorError::CorruptedHeader`] for `field`; every other failure is
/// passed through as I/O.
#[inline(always)]
pub fn read_header_field<R, const N: usize>(
    reader: &mut R,
    field: &'static str,
) -> Result<[u8; N], DecoratorError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(DecoratorError::CorruptedHeader { field })
        }
        Err(e) => Err(e.into()),
    }
}

/// Fill `buf` as far as the reader allows.
///
/// Returns the number of bytes read; anything less than `buf.len()` means
/// the reader hit end of file.
#[inline]
pub fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most three bytes per call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(3);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn read_up_to_collects_short_reads() {
        let mut reader = Trickle(Cursor::new((0u8..40).collect()));
        let mut buf = [0u8; 32];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 32);
        assert_eq!(buf[31], 31);

        let mut rest = [0u8; 32];
        assert_eq!(read_up_to(&mut reader, &mut rest).unwrap(), 8);
    }

    #[test]
    fn header_field_eof_is_corrupted_header() {
        let err = read_header_field::<_, 16>(&mut Cursor::new(vec![1u8; 4]), "salt").unwrap_err();
        assert!(matches!(err, DecoratorError::CorruptedHeader { field: "salt" }));
    }
}
