//! Hash algorithms: the SHA-1 / SHA-2 family with a variant-dispatch
//! facade.
//!
//! Each engine is a streaming context (`new` / `update` / `finalize` /
//! `output`, with `reset` back to the initial state). [`Sha`] wraps the
//! concrete contexts in one closed sum type so HMAC and PBKDF2 can select
//! the algorithm at run time without dynamic dispatch.

pub mod sha1;
pub mod sha256;
pub mod sha512;

pub use {
    sha1::{SHA1_DIGEST_SIZE, Sha1, sha1},
    sha256::{SHA224_DIGEST_SIZE, SHA256_DIGEST_SIZE, Sha224, Sha256, sha224, sha256},
    sha512::{SHA384_DIGEST_SIZE, SHA512_DIGEST_SIZE, Sha384, Sha512, sha384, sha512},
};

use crate::Result;

/// Largest message block length across the family, in bytes.
pub const SHA_MAX_BLOCK_SIZE: usize = sha512::SHA512_BLOCK_SIZE;

/// Largest digest length across the family, in bytes.
pub const SHA_MAX_DIGEST_SIZE: usize = SHA512_DIGEST_SIZE;

/// Selector for one algorithm of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaVersion {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl ShaVersion {
    /// Digest length in bytes.
    pub const fn digest_length(self) -> usize {
        match self {
            ShaVersion::Sha1 => SHA1_DIGEST_SIZE,
            ShaVersion::Sha224 => SHA224_DIGEST_SIZE,
            ShaVersion::Sha256 => SHA256_DIGEST_SIZE,
            ShaVersion::Sha384 => SHA384_DIGEST_SIZE,
            ShaVersion::Sha512 => SHA512_DIGEST_SIZE,
        }
    }

    /// Message block length in bytes.
    pub const fn block_length(self) -> usize {
        match self {
            ShaVersion::Sha1 => sha1::SHA1_BLOCK_SIZE,
            ShaVersion::Sha224 | ShaVersion::Sha256 => sha256::SHA256_BLOCK_SIZE,
            ShaVersion::Sha384 | ShaVersion::Sha512 => sha512::SHA512_BLOCK_SIZE,
        }
    }
}

/// Generic hash context: a tagged variant over the concrete contexts.
///
/// The algorithm set is closed and small, so the variants store their
/// contexts inline and every operation is a `match`.
pub enum Sha {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl Sha {
    /// Fresh accepting context for the selected algorithm.
    pub fn new(version: ShaVersion) -> Self {
        match version {
            ShaVersion::Sha1 => Sha::Sha1(Sha1::new()),
            ShaVersion::Sha224 => Sha::Sha224(Sha224::new()),
            ShaVersion::Sha256 => Sha::Sha256(Sha256::new()),
            ShaVersion::Sha384 => Sha::Sha384(Sha384::new()),
            ShaVersion::Sha512 => Sha::Sha512(Sha512::new()),
        }
    }

    /// The selected algorithm.
    pub fn version(&self) -> ShaVersion {
        match self {
            Sha::Sha1(_) => ShaVersion::Sha1,
            Sha::Sha224(_) => ShaVersion::Sha224,
            Sha::Sha256(_) => ShaVersion::Sha256,
            Sha::Sha384(_) => ShaVersion::Sha384,
            Sha::Sha512(_) => ShaVersion::Sha512,
        }
    }

    /// Digest length in bytes.
    pub fn digest_length(&self) -> usize {
        self.version().digest_length()
    }

    /// Message block length in bytes.
    pub fn block_length(&self) -> usize {
        self.version().block_length()
    }

    /// Returns the context to the initial accepting state.
    pub fn reset(&mut self) {
        match self {
            Sha::Sha1(ctx) => ctx.reset(),
            Sha::Sha224(ctx) => ctx.reset(),
            Sha::Sha256(ctx) => ctx.reset(),
            Sha::Sha384(ctx) => ctx.reset(),
            Sha::Sha512(ctx) => ctx.reset(),
        }
    }

    /// Absorbs message bytes.
    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        match self {
            Sha::Sha1(ctx) => ctx.update(message),
            Sha::Sha224(ctx) => ctx.update(message),
            Sha::Sha256(ctx) => ctx.update(message),
            Sha::Sha384(ctx) => ctx.update(message),
            Sha::Sha512(ctx) => ctx.update(message),
        }
    }

    /// Finalises the digest.
    pub fn finalize(&mut self) -> Result<()> {
        match self {
            Sha::Sha1(ctx) => ctx.finalize(),
            Sha::Sha224(ctx) => ctx.finalize(),
            Sha::Sha256(ctx) => ctx.finalize(),
            Sha::Sha384(ctx) => ctx.finalize(),
            Sha::Sha512(ctx) => ctx.finalize(),
        }
    }

    /// Finalises with a trailing partial byte of `nbits < 8` bits.
    pub fn finalize_with_bits(&mut self, data: u8, nbits: u32) -> Result<()> {
        match self {
            Sha::Sha1(ctx) => ctx.finalize_with_bits(data, nbits),
            Sha::Sha224(ctx) => ctx.finalize_with_bits(data, nbits),
            Sha::Sha256(ctx) => ctx.finalize_with_bits(data, nbits),
            Sha::Sha384(ctx) => ctx.finalize_with_bits(data, nbits),
            Sha::Sha512(ctx) => ctx.finalize_with_bits(data, nbits),
        }
    }

    /// Emits the digest into `result`, which must hold at least
    /// [`Sha::digest_length`] bytes.
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        match self {
            Sha::Sha1(ctx) => ctx.output(result),
            Sha::Sha224(ctx) => ctx.output(result),
            Sha::Sha256(ctx) => ctx.output(result),
            Sha::Sha384(ctx) => ctx.output(result),
            Sha::Sha512(ctx) => ctx.output(result),
        }
    }
}
