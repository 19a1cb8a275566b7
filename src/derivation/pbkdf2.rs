//! PBKDF2 key derivation (RFC 2898, section 5.2).
//!
//! The derived key is assembled from blocks `T_1 .. T_l`, each the XOR of
//! `c` chained HMAC outputs. The HMAC context is reset between blocks and
//! between iterations; no key-schedule caching beyond the keyed context
//! itself is assumed.

use {
    crate::{
        Error, Result,
        hash::{SHA_MAX_DIGEST_SIZE, ShaVersion},
        mac::HmacSha,
        util::secure_zero,
    },
};

/// Supported pseudo-random functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Prf {
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl Pbkdf2Prf {
    fn sha_version(self) -> ShaVersion {
        match self {
            Pbkdf2Prf::HmacSha1 => ShaVersion::Sha1,
            Pbkdf2Prf::HmacSha224 => ShaVersion::Sha224,
            Pbkdf2Prf::HmacSha256 => ShaVersion::Sha256,
            Pbkdf2Prf::HmacSha384 => ShaVersion::Sha384,
            Pbkdf2Prf::HmacSha512 => ShaVersion::Sha512,
        }
    }
}

/// PBKDF2 with HMAC-SHA-256.
pub fn pbkdf2(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    derived_key_length: usize,
) -> Result<Vec<u8>> {
    pbkdf2_with_prf(
        Pbkdf2Prf::HmacSha256,
        password,
        salt,
        iterations,
        derived_key_length,
    )
}

/// PBKDF2 with a selectable HMAC-SHA pseudo-random function.
///
/// Derives `derived_key_length` bytes from `password` and `salt` using
/// `iterations` HMAC applications per block. Both `iterations` and the
/// key length must be nonzero.
pub fn pbkdf2_with_prf(
    prf: Pbkdf2Prf,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    derived_key_length: usize,
) -> Result<Vec<u8>> {
    if iterations == 0 || derived_key_length == 0 {
        return Err(Error::Input);
    }

    let mut hmac = HmacSha::new(prf.sha_version(), password)?;
    let h_len = hmac.digest_length();

    // l blocks cover the key; the last one contributes only r bytes.
    let l = derived_key_length.div_ceil(h_len);
    if l > u32::MAX as usize {
        return Err(Error::Input);
    }
    let r = derived_key_length - (l - 1) * h_len;

    let mut derived_key = Vec::new();
    derived_key
        .try_reserve_exact(derived_key_length)
        .map_err(|_| Error::Memory)?;
    derived_key.resize(derived_key_length, 0);

    for i in 1..=l {
        // Each block starts from a fresh keyed context.
        hmac.reset()?;
        let take = if i == l { r } else { h_len };
        let offset = (i - 1) * h_len;
        xor_blocks(
            &mut hmac,
            salt,
            iterations,
            i as u32,
            &mut derived_key[offset..offset + take],
        )?;
    }

    Ok(derived_key)
}

/// The function `F` of RFC 2898: `U_1 = PRF(P, S || INT(i))`,
/// `U_j = PRF(P, U_{j-1})`, output `U_1 xor ... xor U_c` truncated to
/// `out.len()` bytes, accumulated incrementally.
fn xor_blocks(
    hmac: &mut HmacSha,
    salt: &[u8],
    iterations: u32,
    block_index: u32,
    out: &mut [u8],
) -> Result<()> {
    let digest_length = hmac.digest_length();
    let mut u = [0u8; SHA_MAX_DIGEST_SIZE];

    hmac.update(salt)?;
    hmac.update(&block_index.to_be_bytes())?;
    hmac.finalize()?;
    hmac.output(&mut u[..digest_length])?;
    out.copy_from_slice(&u[..out.len()]);

    for _ in 2..=iterations {
        hmac.reset()?;
        hmac.update(&u[..digest_length])?;
        hmac.finalize()?;
        hmac.output(&mut u[..digest_length])?;
        for (acc, byte) in out.iter_mut().zip(u.iter()) {
            *acc ^= byte;
        }
    }

    secure_zero(&mut u);
    Ok(())
}
