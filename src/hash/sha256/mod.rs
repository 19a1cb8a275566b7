//! SHA-256 and SHA-224 streaming contexts (FIPS 180-4).
//!
//! Both algorithms share the 512-bit block compression in
//! [`computations`]; SHA-224 differs only in its initial hash value and
//! in truncating the digest to the first seven state words.
//!
//! A context moves through three states: *accepting* (created or reset),
//! *finalised* (digest materialised, no further input) and *corrupted*
//! (message-length counter overflowed; terminal except through reset).

pub(crate) mod computations;

use {
    crate::{Error, Result, util::secure_zero},
    computations::compress,
};

/// SHA-256 digest size in bytes.
pub const SHA256_DIGEST_SIZE: usize = 32;
/// SHA-224 digest size in bytes.
pub const SHA224_DIGEST_SIZE: usize = 28;
/// Message block size in bytes, shared by SHA-256 and SHA-224.
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Byte offset of the 64-bit length field in the final block.
const LENGTH_OFFSET: usize = SHA256_BLOCK_SIZE - 8;

const H256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const H224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Streaming SHA-256 context.
pub struct Sha256 {
    h: [u32; 8],
    block: [u8; SHA256_BLOCK_SIZE],
    block_index: usize,
    /// Total message length in bits.
    length: u64,
    computed: bool,
    corrupted: bool,
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256 {
            h: H256_INIT,
            block: [0; SHA256_BLOCK_SIZE],
            block_index: 0,
            length: 0,
            computed: false,
            corrupted: false,
        }
    }

    /// Returns the context to the initial accepting state, erasing the
    /// block buffer first.
    pub fn reset(&mut self) {
        self.reset_with(H256_INIT);
    }

    fn reset_with(&mut self, init: [u32; 8]) {
        secure_zero(&mut self.block);
        self.h = init;
        self.block_index = 0;
        self.length = 0;
        self.computed = false;
        self.corrupted = false;
    }

    /// Absorbs message bytes, compressing each filled 512-bit block.
    ///
    /// Consecutive calls are equivalent to one call on the concatenation.
    /// Rejected with [`Error::ShaState`] once finalised or corrupted.
    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        if self.computed || self.corrupted {
            return Err(Error::ShaState);
        }

        match (message.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.length.checked_add(bits))
        {
            Some(length) => self.length = length,
            None => {
                self.corrupted = true;
                return Err(Error::ShaState);
            }
        }

        for &byte in message {
            self.block[self.block_index] = byte;
            self.block_index += 1;
            if self.block_index == SHA256_BLOCK_SIZE {
                compress(&mut self.h, &self.block);
                self.block_index = 0;
            }
        }
        Ok(())
    }

    /// Finalises the digest: appends the `0x80` terminator, pads, appends
    /// the 64-bit big-endian bit length and runs the final compression.
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

        match self.length.checked_add(nbits as u64) {
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

    /// Emits the digest big-endian into `result` (at least 32 bytes).
    /// Rejected before finalisation.
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        if !self.computed || self.corrupted {
            return Err(Error::ShaState);
        }
        if result.len() < SHA256_DIGEST_SIZE {
            return Err(Error::Input);
        }
        for (chunk, word) in result.chunks_exact_mut(4).zip(self.h) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }

    /// Pads the tail of the message and runs the final compression(s).
    ///
    /// If the length field no longer fits the current block, the block is
    /// flushed first and the length goes into an extra block of padding.
    fn pad(&mut self, pad_byte: u8) {
        if self.block_index >= LENGTH_OFFSET {
            self.block[self.block_index] = pad_byte;
            self.block_index += 1;
            while self.block_index < SHA256_BLOCK_SIZE {
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

        // The block buffer may hold message bytes.
        secure_zero(&mut self.block);
        self.block_index = 0;
        self.length = 0;
        self.computed = true;
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Sha256::new()
    }
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        secure_zero(&mut self.block);
    }
}

/// Streaming SHA-224 context: the SHA-256 machine with its own initial
/// value and a 28-byte digest.
pub struct Sha224 {
    state: Sha256,
}

impl Sha224 {
    pub fn new() -> Self {
        let mut state = Sha256::new();
        state.h = H224_INIT;
        Sha224 { state }
    }

    pub fn reset(&mut self) {
        self.state.reset_with(H224_INIT);
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

    /// Emits the first seven state words big-endian into `result` (at
    /// least 28 bytes).
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        if !self.state.computed || self.state.corrupted {
            return Err(Error::ShaState);
        }
        if result.len() < SHA224_DIGEST_SIZE {
            return Err(Error::Input);
        }
        for (chunk, word) in result.chunks_exact_mut(4).zip(self.state.h).take(7) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }
}

impl Default for Sha224 {
    fn default() -> Self {
        Sha224::new()
    }
}

/// One-shot SHA-256.
pub fn sha256(input: &[u8]) -> Result<[u8; SHA256_DIGEST_SIZE]> {
    let mut ctx = Sha256::new();
    ctx.update(input)?;
    ctx.finalize()?;
    let mut out = [0; SHA256_DIGEST_SIZE];
    ctx.output(&mut out)?;
    Ok(out)
}

/// One-shot SHA-224.
pub fn sha224(input: &[u8]) -> Result<[u8; SHA224_DIGEST_SIZE]> {
    let mut ctx = Sha224::new();
    ctx.update(input)?;
    ctx.finalize()?;
    let mut out = [0; SHA224_DIGEST_SIZE];
    ctx.output(&mut out)?;
    Ok(out)
}
