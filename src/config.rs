//! Stream options chosen by the caller.

use crate::aliases::PasswordString;
use crate::consts::{PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::DecoratorError;
use serde::{Deserialize, Serialize};

/// Which layers to build and how hard to stretch the password.
///
/// Serializable so a host application can persist the user's choices. The
/// password is deliberately not part of it.
///
/// The iteration count is not written to the file; a file can only be read
/// back with the count it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamOptions {
    pub compress: bool,
    pub encrypt: bool,
    pub kdf_iterations: u32,
}

impl StreamOptions {
    #[must_use]
    pub fn new(compress: bool, encrypt: bool) -> Self {
        Self {
            compress,
            encrypt,
            kdf_iterations: PBKDF2_ITERATIONS,
        }
    }

    #[must_use]
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    #[must_use]
    pub fn with_encrypt(mut self, encrypt: bool) -> Self {
        self.encrypt = encrypt;
        self
    }

    /// Override the PBKDF2 iteration count (default [`PBKDF2_ITERATIONS`]).
    #[must_use]
    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    /// Check the options against the supplied password before any I/O.
    ///
    /// Returns the password to key the cipher with, `Some` exactly when
    /// encryption is enabled.
    pub fn validate<'a>(
        &self,
        password: Option<&'a PasswordString>,
    ) -> Result<Option<&'a PasswordString>, DecoratorError> {
        if !self.encrypt {
            return Ok(None);
        }

        if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&self.kdf_iterations) {
            return Err(DecoratorError::Configuration(format!(
                "KDF iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {}",
                self.kdf_iterations
            )));
        }

        match password {
            Some(password) if !password.expose_secret().is_empty() => Ok(Some(password)),
            _ => Err(DecoratorError::Configuration(
                "encryption requires a non-empty password".into(),
            )),
        }
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self::new(false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_iteration_count() {
        let options = StreamOptions::default();
        assert!(!options.compress);
        assert!(!options.encrypt);
        assert_eq!(options.kdf_iterations, 100_000);
    }

    #[test]
    fn password_only_required_when_encrypting() {
        let empty = PasswordString::new(String::new());

        assert!(StreamOptions::new(true, false).validate(None).unwrap().is_none());
        assert!(StreamOptions::new(false, false)
            .validate(Some(&empty))
            .unwrap()
            .is_none());

        for password in [None, Some(&empty)] {
            let err = StreamOptions::new(false, true).validate(password).unwrap_err();
            assert!(matches!(err, DecoratorError::Configuration(_)));
        }
    }

    #[test]
    fn out_of_range_iterations_rejected() {
        let password = PasswordString::new("pw".to_string());
        let options = StreamOptions::new(false, true).with_kdf_iterations(0);
        let err = options.validate(Some(&password)).unwrap_err();
        assert!(matches!(err, DecoratorError::Configuration(_)));
    }
}
