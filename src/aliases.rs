//! # Secure-Gate Type Aliases
//!
//! Every secret or per-file random value handled by the stream layers lives in
//! a [`secure-gate`](https://github.com/Slurp9187/secure-gate) wrapper, so
//! access always goes through an explicit `.expose_secret()` /
//! `.expose_secret_mut()` call.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte AES-256 key derived from the password
//! - [`Block16`] - one 16-byte AES block (plaintext staging, CBC chaining)
//! - [`Iv16`] - 16-byte CBC initialization vector stored in the header
//! - [`Salt16`] - 16-byte PBKDF2 salt stored in the header
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - the user's password
//! - [`KeyBytes`] - variable-length derived key material

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Semantic sub-types
pub type Block16 = SpanBuffer<16>; // one AES block

// variable-length derived key material
pub type KeyBytes = secure_gate::Dynamic<Vec<u8>>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // stream key
fixed_alias!(pub Iv16, 16); // header IV
fixed_alias!(pub Salt16, 16); // header salt
