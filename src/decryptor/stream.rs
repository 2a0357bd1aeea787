//! src/decryptor/stream.rs
//! AES-256-CBC decrypting read layer with PKCS#7 unpadding
//!
//! The layer always holds back the most recently decrypted block, because
//! only the block that turns out to be last carries padding. Padding is
//! checked when the source reaches end of file, never earlier, so a wrong
//! password surfaces on the read that consumes the tail.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::{BLOCK_SIZE, CIPHER_READ_CHUNK};
use crate::decryptor::read::read_up_to;
use crate::error::DecoratorError;
use crate::utils::{pkcs7_unpadded_len, xor_blocks};
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use std::io::{self, Read};

pub struct CbcDecryptReader<R> {
    inner: R,
    cipher: Aes256Dec,
    prev_block: Block16,
    held: Option<Block16>,
    ready: Vec<u8>,
    ready_pos: usize,
    finished: bool,
}

impl<R: Read> CbcDecryptReader<R> {
    /// Wrap `inner`, which must be positioned at the first ciphertext byte.
    pub fn new(inner: R, key: &Aes256Key32, iv: &Iv16) -> Self {
        Self {
            inner,
            cipher: Aes256Dec::new(key.expose_secret().into()),
            prev_block: Block16::new(*iv.expose_secret()),
            held: None,
            ready: Vec::with_capacity(CIPHER_READ_CHUNK),
            ready_pos: 0,
            finished: false,
        }
    }

    #[inline(always)]
    fn decrypt_block(&mut self, ciphertext: &[u8]) -> Block16 {
        let mut aes_block = *AesBlock::from_slice(ciphertext);
        self.cipher.decrypt_block(&mut aes_block);

        let mut plaintext = Block16::new([0u8; 16]);
        xor_blocks(
            aes_block.as_slice(),
            self.prev_block.expose_secret(),
            plaintext.expose_secret_mut(),
        );
        self.prev_block
            .expose_secret_mut()
            .copy_from_slice(ciphertext);
        plaintext
    }

    /// Decrypt the next chunk of ciphertext into `ready`.
    fn refill(&mut self) -> Result<(), DecoratorError> {
        self.ready.clear();
        self.ready_pos = 0;

        let mut chunk = [0u8; CIPHER_READ_CHUNK];
        let filled = read_up_to(&mut self.inner, &mut chunk)?;
        let at_eof = filled < CIPHER_READ_CHUNK;

        if filled % BLOCK_SIZE != 0 {
            return Err(DecoratorError::Crypto(format!(
                "ciphertext is not a whole number of {BLOCK_SIZE}-byte blocks"
            )));
        }

        for block in chunk[..filled].chunks_exact(BLOCK_SIZE) {
            let plaintext = self.decrypt_block(block);
            if let Some(previous) = self.held.replace(plaintext) {
                self.ready.extend_from_slice(previous.expose_secret());
            }
        }

        if at_eof {
            let last = self.held.take().ok_or("missing final padded block")?;
            let len = pkcs7_unpadded_len(last.expose_secret())
                .ok_or("invalid PKCS#7 padding (wrong password or corrupted data)")?;
            self.ready.extend_from_slice(&last.expose_secret()[..len]);
            self.finished = true;
        }

        Ok(())
    }
}

impl<R: Read> Read for CbcDecryptReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while self.ready_pos == self.ready.len() {
            if self.finished {
                return Ok(0);
            }
            self.refill()?;
        }

        let available = &self.ready[self.ready_pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.ready_pos += n;
        Ok(n)
    }
}
