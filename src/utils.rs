// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used on both CBC paths: plaintext ⊕ previous ciphertext before encryption,
/// decrypted block ⊕ previous ciphertext after decryption.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. All callers
/// pass `expose_secret()` of exactly sized [`Block16`](crate::aliases::Block16)
/// buffers or `chunks_exact(16)` slices.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Returns the plaintext length of a PKCS#7-padded final block, or `None` if
/// the padding is invalid.
///
/// The padding bytes are compared without an early exit.
#[inline]
pub fn pkcs7_unpadded_len(block: &[u8; BLOCK_SIZE]) -> Option<usize> {
    let padding = block[BLOCK_SIZE - 1];
    if padding == 0 || padding as usize > BLOCK_SIZE {
        return None;
    }

    let start = BLOCK_SIZE - padding as usize;
    let diff = block[start..]
        .iter()
        .fold(0u8, |acc, &byte| acc | (byte ^ padding));

    (diff == 0).then_some(start)
}
