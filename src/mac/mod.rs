//! Message authentication codes.
//!
//! Currently provides HMAC (RFC 2104) over any hash of the SHA family.

mod hmac;

pub use hmac::{HmacSha, hmac};
