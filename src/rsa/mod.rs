//! Textbook RSA demonstrator.
//!
//! Exposes the raw primitive only: key generation from random primes,
//! `m^e mod n` and `c^d mod n`. There is no padding; turning this into a
//! usable scheme (OAEP, PSS) is a separate concern and out of scope.

use {
    crate::{Error, Result, Sign, integer::Int, prime},
};

/// The fixed public exponent, `2^16 + 1`.
pub const PUBLIC_EXPONENT: u64 = 65537;

/// RSA public key: exponent and modulus.
pub struct RsaPublicKey {
    pub e: Int,
    pub n: Int,
}

/// RSA private key: exponent and modulus.
pub struct RsaPrivateKey {
    pub d: Int,
    pub n: Int,
}

/// Generates an RSA key pair with an `nbits` modulus.
///
/// Picks `p` and `q` as probable primes uniform in
/// `[2^(nbits/2 - 1), 2^(nbits/2))`, so the modulus `n = p * q` has
/// `nbits - 1` or `nbits` bits. The private exponent is
/// `e^-1 mod (p - 1)(q - 1)`; in the rare event that `e` and `phi` share
/// a factor (or `p = q` at small sizes) a fresh prime pair is drawn.
/// `nbits` must be even and at least 16.
pub fn generate_keypair(nbits: usize) -> Result<(RsaPublicKey, RsaPrivateKey)> {
    if nbits < 16 || nbits % 2 != 0 {
        return Err(Error::Input);
    }

    let one = Int::from_digit(1);
    let lower = one.shl(nbits / 2 - 1)?;
    let upper = one.shl(nbits / 2)?;
    let e = Int::from_u64(PUBLIC_EXPONENT);

    loop {
        let p = prime::random_prime(&lower, &upper)?;
        let q = prime::random_prime(&lower, &upper)?;
        if p == q {
            continue;
        }

        let n = p.mul(&q)?;
        let phi = p.sub_digit(1)?.mul(&q.sub_digit(1)?)?;

        match e.mod_inv(&phi) {
            Ok(d) => {
                let public = RsaPublicKey {
                    e: e.clone(),
                    n: n.clone(),
                };
                let private = RsaPrivateKey { d, n };
                return Ok((public, private));
            }
            // gcd(e, phi) != 1; try another prime pair.
            Err(Error::Input) => continue,
            Err(err) => return Err(err),
        }
    }
}

/// RSA encryption primitive: `c = m^e mod n` for `0 <= m < n`.
pub fn encrypt(m: &Int, key: &RsaPublicKey) -> Result<Int> {
    if m.sign() == Sign::Negative || m >= &key.n {
        return Err(Error::Input);
    }
    m.exp_mod(&key.e, &key.n)
}

/// RSA decryption primitive: `m = c^d mod n` for `0 <= c < n`.
pub fn decrypt(c: &Int, key: &RsaPrivateKey) -> Result<Int> {
    if c.sign() == Sign::Negative || c >= &key.n {
        return Err(Error::Input);
    }
    c.exp_mod(&key.d, &key.n)
}
