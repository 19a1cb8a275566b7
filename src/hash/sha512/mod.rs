//! SHA-512 and SHA-384 streaming contexts (FIPS 180-4).
//!
//! The 1024-bit-block counterpart of the SHA-256 module. The message
//! length is tracked in a 128-bit counter and emitted as two big-endian
//! 64-bit halves at bytes 112..128 of the final block, so messages up to
//! `2^128 - 1` bits are representable. SHA-384 differs only in its
//! initial hash value and in truncating the digest to the first six state
//! words.

pub(crate) mod computations;

use {
    crate::{Error, Result, util::secure_zero},
    computations::compress,
};

/// SHA-512 digest size in bytes.
pub const SHA512_DIGEST_SIZE: usize = 64;
/// SHA-384 digest size in bytes.
pub const SHA384_DIGEST_SIZE: usize = 48;
/// Message block size in bytes, shared by SHA-512 and SHA-384.
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Byte offset of the 128-bit length field in the final block.
const LENGTH_OFFSET: usize = SHA512_BLOCK_SIZE - 16;

const H512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

const H384_INIT: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

/// Streaming SHA-512 context.
pub struct Sha512 {
    h: [u64; 8],
    block: [u8; SHA512_BLOCK_SIZE],
    block_index: usize,
    /// Total message length in bits; carries propagate across the full
    /// 128-bit counter.
    length: u128,
    computed: bool,
    corrupted: bool,
}

impl Sha512 {
    pub fn new() -> Self {
        Sha512 {
            h: H512_INIT,
            block: [0; SHA512_BLOCK_SIZE],
            block_index: 0,
            length: 0,
            computed: false,
            corrupted: false,
        }
    }

    /// Returns the context to the initial accepting state, erasing the
    /// block buffer first.
    pub fn reset(&mut self) {
        self.reset_with(H512_INIT);
    }

    fn reset_with(&mut self, init: [u64; 8]) {
        secure_zero(&mut self.block);
        self.h = init;
        self.block_index = 0;
        self.length = 0;
        self.computed = false;
        self.corrupted = false;
    }

    /// Absorbs message bytes, compressing each filled 1024-bit block.
    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        if self.computed || self.corrupted {
            return Err(Error::ShaState);
        }

        match self.length.checked_add(message.len() as u128 * 8) {
            Some(length) => self.length = length,
            None => {
                self.corrupted = true;
                return Err(Error::ShaState);
            }
        }

        for &byte in message {
            self.block[self.block_index] = byte;
            self.block_index += 1;
            if self.block_index == SHA512_BLOCK_SIZE {
                compress(&mut self.h, &self.block);
                self.block_index = 0;
            }
        }
        Ok(())
    }

    /// Finalises the digest: terminator byte, zero padding, 128-bit
    /// big-endian bit length, final compression.
    pub fn finalize(&mut self) -> Result<()> {
        if self.computed || self.corrupted {
            return Err(Error::ShaState);
        }
        self.pad(0x80);
        Ok(())
    }

    /// Finalises with a trailing partial byte: the high `nbits` bits of
    /// `data` (`0 <= nbits < 8`) followed by the terminator bit.
    pub fn finalize_with_bits(&mut self, data: u8, nbits: u32) -> Result<()> {
        if self.computed || self.corrupted {
            return Err(Error::ShaState);
        }
        if nbits >= 8 {
            return Err(Error::Input);
        }

        match self.length.checked_add(nbits as u128) {
            Some(length) => self.length = length,
            None => {
                self.corrupted = true;
                return Err(Error::ShaState);
            }
        }

        let mask = if nbits == 0 { 0 } else { 0xffu8 << (8 - nbits) };
        self.pad((data & mask) | (0x80 >> nbits));
        Ok(())
    }

    /// Emits the digest big-endian into `result` (at least 64 bytes).
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        if !self.computed || self.corrupted {
            return Err(Error::ShaState);
        }
        if result.len() < SHA512_DIGEST_SIZE {
            return Err(Error::Input);
        }
        for (chunk, word) in result.chunks_exact_mut(8).zip(self.h) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }

    fn pad(&mut self, pad_byte: u8) {
        if self.block_index >= LENGTH_OFFSET {
            self.block[self.block_index] = pad_byte;
            self.block_index += 1;
            while self.block_index < SHA512_BLOCK_SIZE {
                self.block[self.block_index] = 0;
                self.block_index += 1;
            }
            compress(&mut self.h, &self.block);
            self.block_index = 0;
        } else {
            self.block[self.block_index] = pad_byte;
            self.block_index += 1;
        }

        while self.block_index < LENGTH_OFFSET {
            self.block[self.block_index] = 0;
            self.block_index += 1;
        }
        self.block[LENGTH_OFFSET..].copy_from_slice(&self.length.to_be_bytes());
        compress(&mut self.h, &self.block);

        secure_zero(&mut self.block);
        self.block_index = 0;
        self.length = 0;
        self.computed = true;
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Sha512::new()
    }
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        secure_zero(&mut self.block);
    }
}

/// Streaming SHA-384 context: the SHA-512 machine with its own initial
/// value and a 48-byte digest.
pub struct Sha384 {
    state: Sha512,
}

impl Sha384 {
    pub fn new() -> Self {
        let mut state = Sha512::new();
        state.h = H384_INIT;
        Sha384 { state }
    }

    pub fn reset(&mut self) {
        self.state.reset_with(H384_INIT);
    }

    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        self.state.update(message)
    }

    pub fn finalize(&mut self) -> Result<()> {
        self.state.finalize()
    }

    pub fn finalize_with_bits(&mut self, data: u8, nbits: u32) -> Result<()> {
        self.state.finalize_with_bits(data, nbits)
    }

    /// Emits the first six state words big-endian into `result` (at least
    /// 48 bytes).
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        if !self.state.computed || self.state.corrupted {
            return Err(Error::ShaState);
        }
        if result.len() < SHA384_DIGEST_SIZE {
            return Err(Error::Input);
        }
        for (chunk, word) in result.chunks_exact_mut(8).zip(self.state.h).take(6) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Sha384::new()
    }
}

/// One-shot SHA-512.
pub fn sha512(input: &[u8]) -> Result<[u8; SHA512_DIGEST_SIZE]> {
    let mut ctx = Sha512::new();
    ctx.update(input)?;
    ctx.finalize()?;
    let mut out = [0; SHA512_DIGEST_SIZE];
    ctx.output(&mut out)?;
    Ok(out)
}

/// One-shot SHA-384.
pub fn sha384(input: &[u8]) -> Result<[u8; SHA384_DIGEST_SIZE]> {
    let mut ctx = Sha384::new();
    ctx.update(input)?;
    ctx.finalize()?;
    let mut out = [0; SHA384_DIGEST_SIZE];
    ctx.output(&mut out)?;
    Ok(out)
}
