//! Key derivation functions.
//!
//! Currently provides PBKDF2 (RFC 2898 / RFC 8018) with HMAC over any
//! hash of the SHA family as the pseudo-random function.

mod pbkdf2;

pub use pbkdf2::{Pbkdf2Prf, pbkdf2, pbkdf2_with_prf};
