//! src/encryptor/stream.rs
//! AES-256-CBC encrypting write layer with PKCS#7 padding
//!
//! Whole blocks are encrypted as soon as they are complete; a partial block
//! waits in `pending` until more plaintext arrives or the layer is closed.
//! Closing always emits one padded block, a full block of `0x10` when the
//! plaintext length was already a multiple of 16.
//!
//! Plaintext is folded into the CBC state before its ciphertext is handed to
//! the inner layer, so a failed write leaves the chain out of step with the
//! file. The layer is poisoned from then on: writes are rejected and close
//! only releases the inner layer.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::chain::WriteLayer;
use crate::consts::BLOCK_SIZE;
use crate::error::DecoratorError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use std::io::{self, Write};

pub struct CbcEncryptWriter {
    inner: Box<dyn WriteLayer>,
    cipher: Aes256Enc,
    prev_block: Block16,
    pending: Block16,
    pending_len: usize,
    ciphertext: Vec<u8>,
    failed: bool,
}

impl CbcEncryptWriter {
    /// Wrap `inner`, which must already hold the header.
    pub fn new(inner: Box<dyn WriteLayer>, key: &Aes256Key32, iv: &Iv16) -> Self {
        Self {
            inner,
            cipher: Aes256Enc::new(key.expose_secret().into()),
            prev_block: Block16::new(*iv.expose_secret()),
            pending: Block16::new([0u8; 16]),
            pending_len: 0,
            ciphertext: Vec::new(),
            failed: false,
        }
    }

    /// Encrypt the full `pending` block and append it to `ciphertext`.
    #[inline(always)]
    fn encrypt_pending(&mut self) {
        let mut xor_output = Block16::new([0u8; 16]);
        xor_blocks(
            self.pending.expose_secret(),
            self.prev_block.expose_secret(),
            xor_output.expose_secret_mut(),
        );

        let mut aes_block = AesBlock::from(*xor_output.expose_secret());
        self.cipher.encrypt_block(&mut aes_block);

        self.prev_block
            .expose_secret_mut()
            .copy_from_slice(aes_block.as_slice());
        self.ciphertext.extend_from_slice(aes_block.as_slice());
        self.pending_len = 0;
    }

    /// Pad and encrypt whatever is pending.
    fn seal(&mut self) {
        let pad = (BLOCK_SIZE - self.pending_len) as u8;
        self.pending.expose_secret_mut()[self.pending_len..].fill(pad);
        self.encrypt_pending();
    }
}

impl Write for CbcEncryptWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failed {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "cipher layer is unusable after a failed write",
            ));
        }
        self.ciphertext.clear();

        let mut rest = buf;
        while !rest.is_empty() {
            let take = (BLOCK_SIZE - self.pending_len).min(rest.len());
            self.pending.expose_secret_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];

            if self.pending_len == BLOCK_SIZE {
                self.encrypt_pending();
            }
        }

        if let Err(e) = self.inner.write_all(&self.ciphertext) {
            self.failed = true;
            return Err(e);
        }
        Ok(buf.len())
    }

    /// Flushes complete blocks only; a partial block stays pending until close.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl WriteLayer for CbcEncryptWriter {
    fn close(self: Box<Self>) -> Result<(), DecoratorError> {
        let mut this = *self;
        let sealed = if this.failed {
            Err(DecoratorError::Io(io::Error::new(
                io::ErrorKind::Other,
                "cipher layer closed after a failed write",
            )))
        } else {
            this.ciphertext.clear();
            this.seal();
            this.inner
                .write_all(&this.ciphertext)
                .map_err(DecoratorError::from)
        };
        let closed = this.inner.close();
        sealed.and(closed)
    }
}
