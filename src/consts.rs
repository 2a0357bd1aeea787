//! # Constants
//!
//! Sizes of the on-disk header fields, cipher parameters, and the PBKDF2
//! iteration bounds shared by the write and read paths.

/// Length of the random PBKDF2 salt at the start of an encrypted file.
pub const SALT_LEN: usize = 16;

/// AES block size in bytes. Also the length of the header IV.
pub const BLOCK_SIZE: usize = 16;

/// Length of the random CBC IV that follows the salt.
pub const IV_LEN: usize = BLOCK_SIZE;

/// AES-256 key length produced by the key derivation.
pub const KEY_LEN: usize = 32;

/// Total size of the unencrypted header (`salt || iv`).
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// Fixed PBKDF2-HMAC-SHA256 iteration count used for every file.
///
/// The count is not recorded in the header, so writer and reader must agree.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
///
/// Set to `5_000_000` to keep a single file open from stalling the caller.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Number of ciphertext bytes the decrypting layer pulls from its source per refill.
pub const CIPHER_READ_CHUNK: usize = 64 * BLOCK_SIZE;
