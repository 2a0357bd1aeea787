// src/lib.rs

pub mod aliases;
pub mod chain;
pub mod compression;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod factory;
pub mod header;
pub mod utils;

// High-level API, what a note editor imports
pub use chain::{LayerKind, ReadStream, WriteStream};
pub use config::StreamOptions;
pub use error::DecoratorError;
pub use factory::{open_read_decorated, open_write_decorated, StreamDecoratorFactory};

// Key derivation is public at the root for callers that need the file key
// outside a stream chain
pub use crypto::kdf::pbkdf2::{derive_key, derive_secure_pbkdf2_key};

pub use header::{read_header, Header};
