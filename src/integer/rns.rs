//! Residue-number-system conversions.
//!
//! A moduli vector is a sequence of pairwise coprime positive integers; a
//! residue vector holds, in the same order, the value reduced modulo each.
//! Both directions work by divide and conquer over the moduli vector, so
//! the expensive reductions and recombinations happen against balanced
//! half-products instead of one modulus at a time.

use {
    super::Int,
    crate::{Error, Result},
    core::cmp::Ordering,
};

/// Product of a sequence of integers; fails on an empty sequence.
pub fn product(values: &[Int]) -> Result<Int> {
    let (first, rest) = values.split_first().ok_or(Error::Input)?;
    let mut acc = first.clone();
    for v in rest {
        acc = acc.mul(v)?;
    }
    Ok(acc)
}

/// Converts an integer to its residue vector for the given moduli.
///
/// Base cases of one and two moduli reduce directly; otherwise the moduli
/// are split in half, `x` is reduced modulo each half-product, and both
/// halves recurse. Every modulus must be strictly positive.
pub fn int_to_rns(x: &Int, moduli: &[Int]) -> Result<Vec<Int>> {
    if moduli.is_empty() {
        return Err(Error::Input);
    }
    if moduli.iter().any(|m| !m.is_positive()) {
        return Err(Error::Input);
    }

    let mut residues = Vec::new();
    residues
        .try_reserve_exact(moduli.len())
        .map_err(|_| Error::Memory)?;
    split_mod(x, moduli, &mut residues)?;
    Ok(residues)
}

fn split_mod(x: &Int, moduli: &[Int], out: &mut Vec<Int>) -> Result<()> {
    match moduli {
        [m] => out.push(x.residue(m)?),
        [m0, m1] => {
            out.push(x.residue(m0)?);
            out.push(x.residue(m1)?);
        }
        _ => {
            let (left, right) = moduli.split_at(moduli.len() / 2);
            let xl = x.residue(&product(left)?)?;
            let xr = x.residue(&product(right)?)?;
            split_mod(&xl, left, out)?;
            split_mod(&xr, right, out)?;
        }
    }
    Ok(())
}

/// Reconstructs the unique `x` in `[0, product(moduli))` from its residue
/// vector (Chinese Remainder Theorem).
///
/// Fails with [`Error::Input`] when the vectors disagree in length, are
/// empty, or the moduli are not pairwise coprime.
pub fn rns_to_int(residues: &[Int], moduli: &[Int]) -> Result<Int> {
    if residues.is_empty() || residues.len() != moduli.len() {
        return Err(Error::Input);
    }
    if moduli.iter().any(|m| !m.is_positive()) {
        return Err(Error::Input);
    }
    let (x, _) = combine(residues, moduli)?;
    Ok(x)
}

/// Recursive two-way combine; returns the value together with the product
/// of the covered moduli.
///
/// For halves `(x1, m1)` and `(x2, m2)`, extended GCD yields
/// `u * m1 + v * m2 = 1`. With `u` and `v` normalised into `[0, m2)` and
/// `[0, m1)`, the sum `(u * x2 mod m2) * m1 + (v * x1 mod m1) * m2` lies
/// below `2 * m1 * m2`, so one conditional subtraction finishes the
/// reduction.
fn combine(residues: &[Int], moduli: &[Int]) -> Result<(Int, Int)> {
    if residues.len() == 1 {
        return Ok((residues[0].residue(&moduli[0])?, moduli[0].clone()));
    }

    let mid = residues.len() / 2;
    let (x1, m1) = combine(&residues[..mid], &moduli[..mid])?;
    let (x2, m2) = combine(&residues[mid..], &moduli[mid..])?;

    let (g, u, v) = m1.egcd(&m2)?;
    if !g.is_one() {
        return Err(Error::Input);
    }
    let u = u.residue(&m2)?;
    let v = v.residue(&m1)?;

    let t1 = u.mul(&x2)?.residue(&m2)?.mul(&m1)?;
    let t2 = v.mul(&x1)?.residue(&m1)?.mul(&m2)?;
    let m = m1.mul(&m2)?;

    let mut x = t1.add(&t2)?;
    if x.cmp(&m) != Ordering::Less {
        x = x.sub(&m)?;
    }
    Ok((x, m))
}
