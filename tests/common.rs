//! tests/common.rs
//! Common constants and helpers shared across test files

use notecrypt::{StreamDecoratorFactory, StreamOptions};

/// Fast iteration count for tests - the default count is covered once in
/// roundtrip_tests.rs and performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Common test note used across multiple tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_NOTE: &str = "Pick up the dry cleaning.\nCall the dentist about Thursday.\n";

/// All four `(compress, encrypt)` combinations
#[allow(dead_code)] // Used across multiple test files
pub const ALL_FLAGS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

/// Factory with the fast test iteration count
#[allow(dead_code)] // Used across multiple test files
pub fn fast_factory(compress: bool, encrypt: bool) -> StreamDecoratorFactory {
    StreamDecoratorFactory::new(
        StreamOptions::new(compress, encrypt).with_kdf_iterations(TEST_ITERATIONS),
    )
}

/// Deterministic text that barely compresses, so even the compressed form
/// spans many cipher blocks
#[allow(dead_code)] // Used across multiple test files
pub fn scrambled_note(len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \n";
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ALPHABET[(state >> 26) as usize] as char
        })
        .collect()
}
