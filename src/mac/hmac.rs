//! Generic HMAC over the SHA family (RFC 2104 / FIPS 198-1).

use {
    crate::{
        Result,
        hash::{SHA_MAX_BLOCK_SIZE, SHA_MAX_DIGEST_SIZE, Sha, ShaVersion},
        util::secure_zero,
    },
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC context over a selectable SHA variant.
///
/// Owns the underlying hash context, the key normalised to the block
/// length, and the cached block and digest lengths of the selected hash.
/// The state machine mirrors the hash contexts: absorb with
/// [`HmacSha::update`], seal with [`HmacSha::finalize`], read the tag with
/// [`HmacSha::output`], and rewind to the keyed initial state with
/// [`HmacSha::reset`].
pub struct HmacSha {
    sha: Sha,
    /// Key normalised to exactly `block_length` bytes.
    key: [u8; SHA_MAX_BLOCK_SIZE],
    block_length: usize,
    digest_length: usize,
}

impl HmacSha {
    /// Creates a keyed context and feeds the inner padding block.
    ///
    /// A key longer than the hash's block length is replaced by its
    /// digest; shorter keys are zero-padded on the right.
    pub fn new(version: ShaVersion, key: &[u8]) -> Result<Self> {
        let mut sha = Sha::new(version);
        let block_length = version.block_length();
        let digest_length = version.digest_length();

        let mut normalised = [0u8; SHA_MAX_BLOCK_SIZE];
        if key.len() > block_length {
            sha.update(key)?;
            sha.finalize()?;
            sha.output(&mut normalised[..digest_length])?;
            sha.reset();
        } else {
            normalised[..key.len()].copy_from_slice(key);
        }

        let mut ctx = HmacSha {
            sha,
            key: normalised,
            block_length,
            digest_length,
        };
        ctx.feed_ipad()?;
        Ok(ctx)
    }

    /// Digest (tag) length in bytes of the selected hash.
    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    /// Message block length in bytes of the selected hash.
    pub fn block_length(&self) -> usize {
        self.block_length
    }

    /// Absorbs message bytes into the inner hash.
    pub fn update(&mut self, message: &[u8]) -> Result<()> {
        self.sha.update(message)
    }

    /// Finalises the tag: reads the inner digest, then hashes
    /// `(K xor opad) || inner` in the reset context.
    pub fn finalize(&mut self) -> Result<()> {
        let mut inner = [0u8; SHA_MAX_DIGEST_SIZE];
        self.sha.finalize()?;
        self.sha.output(&mut inner[..self.digest_length])?;
        self.sha.reset();

        let mut block = [0u8; SHA_MAX_BLOCK_SIZE];
        for i in 0..self.block_length {
            block[i] = self.key[i] ^ OPAD;
        }
        let res = self
            .sha
            .update(&block[..self.block_length])
            .and_then(|_| self.sha.update(&inner[..self.digest_length]))
            .and_then(|_| self.sha.finalize());

        secure_zero(&mut block);
        secure_zero(&mut inner);
        res
    }

    /// Emits the tag into `result`, which must hold at least
    /// [`HmacSha::digest_length`] bytes.
    pub fn output(&self, result: &mut [u8]) -> Result<()> {
        self.sha.output(result)
    }

    /// Returns the context to the keyed initial state (inner padding
    /// already absorbed), ready for a fresh message.
    pub fn reset(&mut self) -> Result<()> {
        self.sha.reset();
        self.feed_ipad()
    }

    fn feed_ipad(&mut self) -> Result<()> {
        let mut block = [0u8; SHA_MAX_BLOCK_SIZE];
        for i in 0..self.block_length {
            block[i] = self.key[i] ^ IPAD;
        }
        let res = self.sha.update(&block[..self.block_length]);
        secure_zero(&mut block);
        res
    }
}

impl Drop for HmacSha {
    /// The normalised key is secret material; wipe it before release.
    fn drop(&mut self) {
        secure_zero(&mut self.key);
    }
}

/// One-shot HMAC: returns the tag for `key` and `message`.
pub fn hmac(version: ShaVersion, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut ctx = HmacSha::new(version, key)?;
    ctx.update(message)?;
    ctx.finalize()?;
    let mut tag = vec![0u8; ctx.digest_length()];
    ctx.output(&mut tag)?;
    Ok(tag)
}
