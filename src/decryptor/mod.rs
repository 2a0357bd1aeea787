// src/decryptor/mod.rs

//! Read-side layers.
//!
//! Helpers: `read_header_field` for exact header reads, `read_up_to` for
//! block-aligned refills, and [`CbcDecryptReader`] for the cipher layer.

pub(crate) mod read;
pub(crate) mod stream;

pub use read::{open_raw_source, read_header_field, read_up_to, RawSource};
pub use stream::CbcDecryptReader;
