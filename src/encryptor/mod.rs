// src/encryptor/mod.rs

//! Write-side layers.
//!
//! [`RawSink`] owns the destination file; [`CbcEncryptWriter`] encrypts
//! everything written to it and owns the layer beneath.

pub(crate) mod stream;
pub(crate) mod write;

pub use stream::CbcEncryptWriter;
pub use write::RawSink;
