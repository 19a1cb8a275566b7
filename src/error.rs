//! Crate-wide error taxonomy.
//!
//! Every fallible operation in the crate surfaces one of the kinds below
//! and propagates it unchanged to the caller. Operations with several
//! outputs are atomic: on error, no output is partially written. The only
//! internal retry lives in the entropy shim ([`crate::rng`]).

/// Error kind returned by every fallible operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A caller-supplied precondition was violated (division by zero, bad
    /// radix, malformed digit, empty moduli vector, negative exponent,
    /// out-of-range RSA message, ...).
    #[error("invalid input")]
    Input,

    /// Allocation failed while growing a limb vector or scratch buffer.
    /// The previous state of all operands is preserved.
    #[error("out of memory")]
    Memory,

    /// The operating-system entropy source failed after the retry budget.
    #[error("entropy source exhausted")]
    Rng,

    /// A hash or HMAC context was driven through a forbidden state
    /// transition: input after finalisation, output before finalisation,
    /// or any use of a corrupted context.
    #[error("hash context in invalid state")]
    ShaState,
}

/// Shorthand result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
