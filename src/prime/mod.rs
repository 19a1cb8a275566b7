//! Primality testing and random prime generation.
//!
//! A candidate first runs through trial division against a small prime
//! table, which settles roughly three quarters of random inputs; survivors
//! go to Miller-Rabin with a round count picked for a `2^-80` *average
//! case* error bound, or a fixed 60 rounds in safe mode. The schedule is
//! not adversarially safe: round counts tuned for random candidates say
//! nothing about inputs crafted to fool the test.

use {
    crate::{
        Result,
        integer::{Digit, Int},
        rng,
    },
};

/// Trial-division table. Covers the primes up to 127, which filters about
/// 75% of candidates while every entry still fits a single limb, keeping
/// the single-limb division fast path applicable.
pub const TRIAL_PRIMES: [Digit; 31] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127,
];

/// Miller-Rabin rounds in safe mode.
pub const SAFE_ROUNDS: u32 = 60;

/// Miller-Rabin round count for an `n`-bit candidate with error below
/// `2^-80` on random inputs (Damgard et al.; Handbook of Applied
/// Cryptography).
pub fn miller_rabin_rounds(bits: usize) -> u32 {
    match bits {
        1300.. => 2,
        850.. => 3,
        650.. => 4,
        550.. => 5,
        450.. => 6,
        400.. => 7,
        350.. => 8,
        300.. => 9,
        250.. => 12,
        200.. => 15,
        150.. => 18,
        _ => 60,
    }
}

/// Outcome of trial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialDivision {
    /// The candidate equals a table prime.
    Prime,
    /// The candidate is divisible by (and distinct from) a table prime,
    /// or is even, non-positive or one.
    Composite,
    /// No table prime divides the candidate; a probabilistic test must
    /// decide.
    Inconclusive,
}

/// Trial division against [`TRIAL_PRIMES`].
///
/// Even and non-positive candidates are reported composite immediately,
/// as is one; the combined test only ever sees odd candidates.
pub fn trial_division(x: &Int) -> Result<TrialDivision> {
    if x.is_even() || !x.is_positive() || x.is_one() {
        return Ok(TrialDivision::Composite);
    }

    for &p in TRIAL_PRIMES.iter() {
        if *x == Int::from_digit(p) {
            return Ok(TrialDivision::Prime);
        }
        let (_, r) = x.div_digit(p)?;
        if r == 0 {
            return Ok(TrialDivision::Composite);
        }
    }
    Ok(TrialDivision::Inconclusive)
}

/// Miller-Rabin compositeness test with `t` rounds.
///
/// Writes `n - 1 = 2^r * d` with `d` odd. Each round samples a witness
/// `a` in `[2, n - 1)`, computes `x = a^d mod n`, and accepts if `x` is
/// `1` or `n - 1` or some of the first `r - 1` squarings of `x` reaches
/// `n - 1`; otherwise `n` is composite. Expects an odd candidate `n > 3`.
pub fn miller_rabin(n: &Int, t: u32) -> Result<bool> {
    let n1 = n.sub_digit(1)?;

    let mut d = n1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d = d.shr(1)?;
        r += 1;
    }

    let two = Int::from_digit(2);
    'round: for _ in 0..t {
        let a = rng::rand_range(&two, &n1)?;
        let mut x = a.exp_mod(&d, n)?;
        if x.is_one() || x == n1 {
            continue 'round;
        }
        for _ in 1..r {
            x = x.sqr()?.residue(n)?;
            if x == n1 {
                continue 'round;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

/// Combined primality test: trial division, then Miller-Rabin on
/// inconclusive candidates.
///
/// With `safe` set the round count is pinned to [`SAFE_ROUNDS`];
/// otherwise it comes from the bit-length schedule.
pub fn is_prime(x: &Int, safe: bool) -> Result<bool> {
    match trial_division(x)? {
        TrialDivision::Prime => Ok(true),
        TrialDivision::Composite => Ok(false),
        TrialDivision::Inconclusive => {
            let t = if safe {
                SAFE_ROUNDS
            } else {
                miller_rabin_rounds(x.bit_len())
            };
            miller_rabin(x, t)
        }
    }
}

/// Samples uniform candidates in `[a, b)` until one passes [`is_prime`].
pub fn random_prime(a: &Int, b: &Int) -> Result<Int> {
    loop {
        let candidate = rng::rand_range(a, b)?;
        if is_prime(&candidate, false)? {
            return Ok(candidate);
        }
    }
}
