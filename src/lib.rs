//! Cryptographic toolkit built on an arbitrary-precision integer core.
//!
//! The crate provides the classical multi-precision algorithms together
//! with a small set of primitives layered on top of them. Everything is
//! synchronous and single-threaded; the only ambient resource is the
//! operating-system entropy source.
//!
//! # Module overview
//!
//! - `integer`
//!   The multi-precision signed integer: densely packed sub-word limbs,
//!   schoolbook and Comba multiplication, normalised long division,
//!   extended GCD, modular exponentiation, RNS/CRT conversion and radix
//!   I/O. This is the foundation the rest of the crate consumes.
//!
//! - `rng`
//!   Uniform random bytes, limbs and integers, built directly on the OS
//!   entropy syscall with bounded retries and rejection sampling.
//!
//! - `hash`
//!   Streaming SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512 contexts plus
//!   a closed variant-dispatch facade over the family.
//!
//! - `mac`
//!   Generic HMAC over any hash of the family.
//!
//! - `derivation`
//!   PBKDF2 with a selectable HMAC-SHA pseudo-random function.
//!
//! - `prime`
//!   Trial division, Miller-Rabin and random prime generation.
//!
//! - `rsa`
//!   The textbook RSA primitive (no padding), composing the integer, RNG
//!   and primality layers.
//!
//! # Design notes
//!
//! Arithmetic takes borrowed operands and returns fresh values, so
//! aliasing between inputs and outputs cannot arise. Fallible operations
//! return the crate-wide [`Error`]; allocation failures while growing
//! limb storage surface as [`Error::Memory`] rather than aborting.
//! Release paths for integers, hash blocks and keys erase their contents
//! with volatile writes before freeing.
//!
//! The limb width is a compile-time profile: 60-bit limbs over `u64` by
//! default, with `limb-32` and `limb-8` features for the narrower
//! configurations.

mod error;
mod os;
mod util;

pub mod derivation;
pub mod hash;
pub mod integer;
pub mod mac;
pub mod prime;
pub mod rng;
pub mod rsa;

pub use {
    error::{Error, Result},
    hash::{Sha, ShaVersion},
    integer::{Digit, Int, Sign, Word},
    mac::HmacSha,
};
