//! Textual and byte-level integer I/O.
//!
//! Text uses bases 2 through 16 with digits `0-9 A-F` (case-insensitive on
//! input, upper case on output) and an optional leading sign. Raw bytes are
//! ingested little-endian at the bit level: bit `i` of byte `i / 8`, low
//! bit first, becomes bit `i` of the magnitude.

use {
    super::{DIGIT_BITS, Digit, Int},
    crate::{Error, Result},
    core::{cmp::Ordering, fmt},
};

const RADIX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

impl Int {
    /// Parses an integer in the given radix (2..=16).
    ///
    /// Accepts an optional leading `+` or `-` followed by at least one
    /// digit; `A-F` match either case. A signed zero parses to positive
    /// zero.
    pub fn from_radix(s: &str, radix: u32) -> Result<Int> {
        if !(2..=16).contains(&radix) {
            return Err(Error::Input);
        }

        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some((b'+', rest)) => (false, rest),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(Error::Input);
        }

        let mut x = Int::new();
        for &c in digits {
            let d = (c as char).to_digit(16).ok_or(Error::Input)?;
            if d >= radix {
                return Err(Error::Input);
            }
            x = x.mul_digit(radix as Digit)?.add_digit(d as Digit)?;
        }
        if negative {
            x.flip_sign();
        }
        Ok(x)
    }

    /// Formats the integer in the given radix (2..=16).
    ///
    /// Digits are peeled low-to-high by repeated single-limb division,
    /// then the buffer is reversed; negative values get a leading `-`.
    pub fn to_radix(&self, radix: u32) -> Result<String> {
        if !(2..=16).contains(&radix) {
            return Err(Error::Input);
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let mut out = Vec::new();
        out.try_reserve(self.radix_len_bound(radix)?)
            .map_err(|_| Error::Memory)?;

        let mut t = self.abs();
        while !t.is_zero() {
            let (q, r) = t.div_digit(radix as Digit)?;
            out.push(RADIX_CHARS[r as usize]);
            t = q;
        }
        if self.is_negative() {
            out.push(b'-');
        }
        out.reverse();

        // RADIX_CHARS and the sign are ASCII.
        String::from_utf8(out).map_err(|_| Error::Input)
    }

    /// Conservative upper bound on the length of [`Int::to_radix`] output,
    /// including one slack character and room for a terminator.
    ///
    /// Counts how many times the radix can be scaled up before exceeding
    /// the magnitude.
    pub fn radix_len_bound(&self, radix: u32) -> Result<usize> {
        if !(2..=16).contains(&radix) {
            return Err(Error::Input);
        }

        let mut len = 2;
        if self.is_negative() {
            len += 1;
        }

        let mag = self.abs();
        let mut v = Int::from_digit(radix as Digit);
        while Int::cmp_mag(&v, &mag) != Ordering::Greater {
            len += 1;
            v = v.mul_digit(radix as Digit)?;
        }
        Ok(len + 1)
    }

    /// Builds a non-negative integer from little-endian bytes.
    ///
    /// Bit `i` of byte `i / 8` (low bit first within each byte) becomes
    /// bit `i` of the magnitude. An empty slice yields zero.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Int> {
        let mut x = Int::new();
        if bytes.is_empty() {
            return Ok(x);
        }
        x.grow(bytes.len() * 8 / DIGIT_BITS as usize + 1)?;

        let mut d: Digit = 0;
        let mut limb = 0;
        for i in 0..bytes.len() * 8 {
            let bit = (bytes[i / 8] >> (i % 8)) & 1;
            d |= (bit as Digit) << ((i % DIGIT_BITS as usize) as u32);
            if (i + 1) % DIGIT_BITS as usize == 0 {
                x.digits[limb] = d;
                limb += 1;
                d = 0;
            }
        }
        x.digits[limb] = d;
        x.used = limb + 1;
        Int::clamp(&mut x);
        Ok(x)
    }
}

impl fmt::Display for Int {
    /// Decimal rendering via [`Int::to_radix`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_radix(10).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl core::str::FromStr for Int {
    type Err = Error;

    fn from_str(s: &str) -> Result<Int> {
        Int::from_radix(s, 10)
    }
}
