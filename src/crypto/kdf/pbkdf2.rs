//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, KeyBytes, PasswordString, Salt16};
use crate::consts::{PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::DecoratorError;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Derive PBKDF2-HMAC-SHA256 directly into a caller-provided buffer.
///
/// The output length is `out_key.len()`. Deterministic: the same password,
/// salt, iteration count and length always produce the same bytes.
#[inline(always)]
pub fn derive_secure_pbkdf2_key(
    password: &PasswordString,
    salt: &[u8],
    iterations: u32,
    out_key: &mut [u8],
) -> Result<(), DecoratorError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(DecoratorError::Configuration(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        salt,
        iterations,
        out_key,
    )
    .map_err(|e| DecoratorError::Crypto(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}

/// Derive `key_length` bytes from `password` and `salt` with the fixed
/// [`PBKDF2_ITERATIONS`] count.
pub fn derive_key(
    password: &PasswordString,
    salt: &[u8],
    key_length: usize,
) -> Result<KeyBytes, DecoratorError> {
    if key_length == 0 {
        return Err(DecoratorError::Configuration(
            "derived key length must be non-zero".into(),
        ));
    }

    let mut key = KeyBytes::new(vec![0u8; key_length]);
    derive_secure_pbkdf2_key(password, salt, PBKDF2_ITERATIONS, key.expose_secret_mut())?;
    Ok(key)
}

/// Derive the AES-256 stream key for one file from its header salt.
#[inline]
pub(crate) fn derive_stream_key(
    password: &PasswordString,
    salt: &Salt16,
    iterations: u32,
) -> Result<Aes256Key32, DecoratorError> {
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_secure_pbkdf2_key(
        password,
        salt.expose_secret(),
        iterations,
        key.expose_secret_mut(),
    )?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_key_matches_slice_derivation() {
        let password = PasswordString::new("notes".to_string());
        let salt = Salt16::new([0x07; 16]);

        let key = derive_stream_key(&password, &salt, 10).unwrap();

        let mut expected = [0u8; 32];
        derive_secure_pbkdf2_key(&password, &[0x07; 16], 10, &mut expected).unwrap();
        assert_eq!(key.expose_secret(), &expected);
    }

    #[test]
    fn zero_iterations_rejected() {
        let password = PasswordString::new("notes".to_string());
        let mut out = [0u8; 32];
        let err = derive_secure_pbkdf2_key(&password, b"salt", 0, &mut out).unwrap_err();
        assert!(matches!(err, DecoratorError::Configuration(_)));
    }

    #[test]
    fn zero_key_length_rejected() {
        let password = PasswordString::new("notes".to_string());
        let err = derive_key(&password, b"salt", 0).unwrap_err();
        assert!(matches!(err, DecoratorError::Configuration(_)));
    }
}
