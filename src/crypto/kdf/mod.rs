//! # Key Derivation Functions (KDF)
//!
//! Passwords are turned into AES-256 keys with PBKDF2-HMAC-SHA256, salted
//! with the 16 random bytes stored at the front of every encrypted file.
//!
//! For most use cases the [`factory`](crate::factory) functions handle key
//! derivation automatically. [`pbkdf2::derive_key`] is exposed for callers
//! that need the same key outside a stream chain.

pub mod pbkdf2;
