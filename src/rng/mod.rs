//! Cryptographically secure random generation.
//!
//! Wraps the operating-system entropy source (see [`crate::os`]) and
//! builds uniform multi-precision sampling on top of it: random limbs,
//! uniform values below a power of the radix, and rejection-sampled
//! uniform values in arbitrary ranges. All functions are synchronous; the
//! only blocking happens briefly inside the entropy syscall, bounded by
//! its retry budget.

use {
    crate::{
        Error, Result,
        integer::{DIGIT_MASK, Digit, Int, Sign},
        os,
    },
    core::cmp::Ordering,
};

/// Fills a buffer with cryptographically secure random bytes.
///
/// Fails with [`Error::Rng`] once the platform shim exhausts its retry
/// budget.
pub fn rand_bytes(buf: &mut [u8]) -> Result<()> {
    os::sys_random(buf)
}

/// Samples a single limb uniformly in `[0, B)`.
///
/// Fills the limb with random bytes and masks down to `DIGIT_BITS`.
pub fn rand_digit() -> Result<Digit> {
    let mut bytes = [0u8; size_of::<Digit>()];
    rand_bytes(&mut bytes)?;
    Ok(Digit::from_le_bytes(bytes) & DIGIT_MASK)
}

/// Samples uniformly in `[0, B^k)` by drawing `k` independent limbs.
pub fn rand_base_pow(k: usize) -> Result<Int> {
    if k == 0 {
        return Err(Error::Input);
    }

    let mut x = Int::new();
    x.grow(k)?;
    for i in 0..k {
        x.digits[i] = rand_digit()?;
    }
    x.used = k;
    x.sign = Sign::Positive;
    Int::clamp(&mut x);
    Ok(x)
}

/// Samples uniformly in `[0, b)` for `b > 0`.
///
/// Rejection sampling: find the smallest `k` with `B^k >= b`, cut the
/// sample space down to the largest multiple of `b` that fits, redraw
/// until a sample lands below the cutoff, then reduce modulo `b`. The
/// acceptance probability is at least one half, so the expected number of
/// draws is bounded by two.
pub fn rand_below(b: &Int) -> Result<Int> {
    if !b.is_positive() {
        return Err(Error::Input);
    }

    // Smallest power of the radix reaching b.
    let mut base_power = Int::from_digit(1);
    base_power.lshd(1)?;
    let mut k = 1;
    while Int::cmp_mag(&base_power, b) == Ordering::Less {
        base_power.lshd(1)?;
        k += 1;
    }

    // Largest multiple of b that fits below B^k.
    let (_, excess) = base_power.div(b)?;
    let cutoff = base_power.sub(&excess)?;

    loop {
        let x = rand_base_pow(k)?;
        if Int::cmp_mag(&x, &cutoff) == Ordering::Less {
            return x.div(b).map(|(_, r)| r);
        }
    }
}

/// Samples uniformly in `[a, b)` for `a < b`.
pub fn rand_range(a: &Int, b: &Int) -> Result<Int> {
    if a.cmp(b) != Ordering::Less {
        return Err(Error::Input);
    }
    let width = b.sub(a)?;
    rand_below(&width)?.add(a)
}
