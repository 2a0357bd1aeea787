// src/crypto/rng.rs
//! Secure randomness for fixed-size header values
//!
//! Adds `T::random()` to every [`SpanBuffer`](crate::aliases::SpanBuffer)
//! type (`Salt16`, `Iv16`, …) using a thread-local `OsRng`, so concurrent
//! writers on different threads never share RNG state.

use crate::error::DecoratorError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, DecoratorError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline(always)]
    fn random() -> Result<Self, DecoratorError> {
        RNG.with(|rng_cell| {
            let mut rng = rng_cell.borrow_mut();
            let mut value = Fixed::new([0u8; N]);
            rng.try_fill_bytes(value.expose_secret_mut())
                .map_err(|e| DecoratorError::Crypto(format!("OS random source failed: {e}")))?;
            Ok(value)
        })
    }
}
