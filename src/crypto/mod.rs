// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, randomness).
//!
//! The CBC layers themselves live in [`encryptor`](crate::encryptor) and
//! [`decryptor`](crate::decryptor); this module only holds what both share.

pub mod kdf;
pub mod rng;
