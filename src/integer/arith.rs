//! Arithmetic on [`Int`]: addition, subtraction, multiplication,
//! division, shifts and exponentiation.
//!
//! Signed add/sub are thin shells over two unsigned kernels that require
//! `|x| >= |y|`; the shells reorder operands and fix up signs. The
//! multiplication dispatcher picks the Comba column multiplier whenever the
//! operand sizes guarantee its column accumulator cannot overflow, and the
//! schoolbook kernel otherwise. Division is normalised schoolbook long
//! division (Knuth's Algorithm D); the `small-division` feature swaps in a
//! bit-serial divider with identical outputs.

use {
    super::{BASE, COMBA_MAX_DIGITS, DIGIT_BITS, DIGIT_MASK, Digit, Int, Sign, Word},
    crate::{Error, Result},
    core::cmp::Ordering,
};

impl Int {
    /// Computes `self + rhs`.
    pub fn add(&self, rhs: &Int) -> Result<Int> {
        // The kernels need |x| >= |y|; addition commutes, so swap freely.
        let (x, y) = if Int::cmp_mag(self, rhs) == Ordering::Less {
            (rhs, self)
        } else {
            (self, rhs)
        };

        let mut z = match (x.sign, y.sign) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
                let mut z = Int::add_mag(x, y)?;
                z.sign = x.sign;
                z
            }
            // Mixed signs reduce to a magnitude subtraction; the larger
            // operand decides the sign.
            _ => {
                let mut z = Int::sub_mag(x, y)?;
                z.sign = x.sign;
                z
            }
        };
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Computes `self - rhs`.
    pub fn sub(&self, rhs: &Int) -> Result<Int> {
        // Reorder so |x| >= |y|; a swap also flips the result sign since
        // x - y = -(y - x).
        let (x, y, flip) = if Int::cmp_mag(self, rhs) == Ordering::Less {
            (rhs, self, true)
        } else {
            (self, rhs, false)
        };

        let mut z = match (x.sign, y.sign) {
            (Sign::Positive, Sign::Positive) => {
                let mut z = Int::sub_mag(x, y)?;
                z.sign = Sign::Positive;
                z
            }
            (Sign::Negative, Sign::Positive) => {
                let mut z = Int::add_mag(x, y)?;
                z.sign = Sign::Negative;
                z
            }
            (Sign::Positive, Sign::Negative) => {
                let mut z = Int::add_mag(x, y)?;
                z.sign = Sign::Positive;
                z
            }
            (Sign::Negative, Sign::Negative) => {
                let mut z = Int::sub_mag(x, y)?;
                z.sign = Sign::Negative;
                z
            }
        };
        if flip {
            z.flip_sign();
        }
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Computes `self + d` for a single limb `d`.
    pub fn add_digit(&self, d: Digit) -> Result<Int> {
        self.add(&Int::from_digit(d))
    }

    /// Computes `self - d` for a single limb `d`.
    pub fn sub_digit(&self, d: Digit) -> Result<Int> {
        self.sub(&Int::from_digit(d))
    }

    /// Magnitude addition, requires `|x| >= |y|`. A limb holds
    /// `DIGIT_BITS + 1` bits, so the per-limb sum plus carry never wraps.
    fn add_mag(x: &Int, y: &Int) -> Result<Int> {
        debug_assert!(Int::cmp_mag(x, y) != Ordering::Less);

        let mut z = Int::new();
        z.grow(x.used + 1)?;

        let mut carry: Digit = 0;
        for i in 0..y.used {
            let t = x.digits[i] + y.digits[i] + carry;
            z.digits[i] = t & DIGIT_MASK;
            carry = t >> DIGIT_BITS;
        }
        for i in y.used..x.used {
            let t = x.digits[i] + carry;
            z.digits[i] = t & DIGIT_MASK;
            carry = t >> DIGIT_BITS;
        }
        z.digits[x.used] = carry;
        z.used = x.used + 1;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Magnitude subtraction, requires `|x| >= |y|`. The borrow out of a
    /// limb shows up as the top bit of the wrapped difference.
    fn sub_mag(x: &Int, y: &Int) -> Result<Int> {
        debug_assert!(Int::cmp_mag(x, y) != Ordering::Less);

        let mut z = Int::new();
        z.grow(x.used)?;

        let mut borrow: Digit = 0;
        for i in 0..y.used {
            let t = x.digits[i].wrapping_sub(y.digits[i]).wrapping_sub(borrow);
            borrow = t >> (Digit::BITS - 1);
            z.digits[i] = t & DIGIT_MASK;
        }
        for i in y.used..x.used {
            let t = x.digits[i].wrapping_sub(borrow);
            borrow = t >> (Digit::BITS - 1);
            z.digits[i] = t & DIGIT_MASK;
        }
        debug_assert_eq!(borrow, 0);
        z.used = x.used;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Computes `self * rhs`. The sign of the product is the XOR of the
    /// operand signs; the kernels work on magnitudes.
    pub fn mul(&self, rhs: &Int) -> Result<Int> {
        Int::mul_trunc(self, rhs, self.used + rhs.used)
    }

    /// Computes `self * self`.
    pub fn sqr(&self) -> Result<Int> {
        self.mul(self)
    }

    /// Computes `x * y` truncated modulo `B^digits`.
    ///
    /// With `digits = x.used + y.used` this is the full product. The Comba
    /// kernel is selected when `min(x.used, y.used, digits)` stays within
    /// [`COMBA_MAX_DIGITS`], the largest column count whose accumulator
    /// fits the double word.
    pub fn mul_trunc(x: &Int, y: &Int, digits: usize) -> Result<Int> {
        if digits == 0 {
            return Ok(Int::new());
        }
        let mut z = if x.used.min(y.used).min(digits) <= COMBA_MAX_DIGITS {
            Int::mul_comba(x, y, digits)?
        } else {
            Int::mul_schoolbook(x, y, digits)?
        };
        if x.sign != y.sign {
            z.flip_sign();
        }
        Ok(z)
    }

    /// Computes `self * d` for a single limb `d < B`; sign is preserved.
    pub fn mul_digit(&self, d: Digit) -> Result<Int> {
        debug_assert!(d <= DIGIT_MASK);

        let mut z = Int::new();
        z.grow(self.used + 1)?;

        let mut carry: Word = 0;
        for i in 0..self.used {
            let t = self.digits[i] as Word * d as Word + carry;
            z.digits[i] = (t & (BASE - 1)) as Digit;
            carry = t >> DIGIT_BITS;
        }
        z.digits[self.used] = carry as Digit;
        z.used = self.used + 1;
        z.sign = self.sign;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Nested-loop multiplication with the carry folded into the running
    /// row. A carry written at `i + y.used` is either re-read by the next
    /// row or is the final top limb, so plain assignment suffices.
    fn mul_schoolbook(x: &Int, y: &Int, digits: usize) -> Result<Int> {
        let mut z = Int::new();
        z.grow(digits)?;

        for i in 0..x.used {
            let cap = y.used.min(digits.saturating_sub(i));
            if cap == 0 {
                break;
            }
            let xi = x.digits[i] as Word;
            let mut carry: Word = 0;
            for j in 0..cap {
                let t = z.digits[i + j] as Word + xi * y.digits[j] as Word + carry;
                z.digits[i + j] = (t & (BASE - 1)) as Digit;
                carry = t >> DIGIT_BITS;
            }
            if i + cap < digits {
                z.digits[i + cap] = carry as Digit;
            }
        }

        z.used = digits;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Column-accumulator multiplication: for each output column, sum every
    /// `x_i * y_j` with `i + j = k` into a double word, emit the low limb
    /// and feed the high part to the next column.
    fn mul_comba(x: &Int, y: &Int, digits: usize) -> Result<Int> {
        let cap = digits.min(x.used + y.used);
        let mut z = Int::new();
        z.grow(cap)?;

        let mut acc: Word = 0;
        for k in 0..cap {
            let lo = (k + 1).saturating_sub(y.used);
            let hi = k.min(x.used - 1);
            for i in lo..=hi {
                acc += x.digits[i] as Word * y.digits[k - i] as Word;
            }
            z.digits[k] = (acc & (BASE - 1)) as Digit;
            acc >>= DIGIT_BITS;
        }

        z.used = cap;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Euclidean division: returns `(q, r)` with `self = q * rhs + r` and
    /// `0 <= r < |rhs|`. Fails with [`Error::Input`] when `rhs` is zero.
    pub fn div(&self, rhs: &Int) -> Result<(Int, Int)> {
        if rhs.is_zero() {
            return Err(Error::Input);
        }

        let (qm, rm) = match Int::cmp_mag(self, rhs) {
            Ordering::Less => (Int::new(), self.abs()),
            Ordering::Equal => (Int::from_digit(1), Int::new()),
            Ordering::Greater => Int::div_mag(&self.abs(), &rhs.abs())?,
        };

        // Fix up signs so the remainder is always non-negative.
        let (q, r) = match (self.sign, rhs.sign, rm.is_zero()) {
            (Sign::Positive, Sign::Positive, _) => (qm, rm),
            (Sign::Positive, Sign::Negative, _) => (qm.negated(), rm),
            (Sign::Negative, Sign::Positive, true) => (qm.negated(), rm),
            (Sign::Negative, Sign::Negative, true) => (qm, rm),
            (Sign::Negative, Sign::Positive, false) => {
                (qm.add_digit(1)?.negated(), rhs.abs().sub(&rm)?)
            }
            (Sign::Negative, Sign::Negative, false) => (qm.add_digit(1)?, rhs.abs().sub(&rm)?),
        };
        Ok((q, r))
    }

    /// Normalised schoolbook long division on magnitudes; requires
    /// `x > y > 0`. Shifting both operands until the divisor's top limb has
    /// its most significant bit set bounds each quotient estimate to within
    /// one of the true digit.
    #[cfg(not(feature = "small-division"))]
    fn div_mag(x: &Int, y: &Int) -> Result<(Int, Int)> {
        let top = y.digits[y.used - 1];
        let shift = (DIGIT_BITS - (Digit::BITS - top.leading_zeros())) as usize;
        let mut rem = x.shl(shift)?;
        let ys = y.shl(shift)?;

        let n = ys.used;
        let m = rem.used - n;
        let mut q = Int::new();
        q.grow(m + 1)?;
        q.used = m + 1;

        // Top correction: at most one subtraction of y * B^m.
        let mut y_top = ys.clone();
        y_top.lshd(m)?;
        if Int::cmp_mag(&rem, &y_top) != Ordering::Less {
            q.digits[m] = 1;
            rem = rem.sub(&y_top)?;
        }

        let y1 = ys.digits[n - 1] as Word;
        let y_top2 = Int::from_limbs(&[
            if n >= 2 { ys.digits[n - 2] } else { 0 },
            ys.digits[n - 1],
        ]);

        for j in (0..m).rev() {
            // Two-limb estimate, capped at B - 1.
            let num = ((rem.digit(n + j) as Word) << DIGIT_BITS) | rem.digit(n + j - 1) as Word;
            let mut qhat = (num / y1).min(BASE - 1);

            // Refine against the top three remainder limbs; limbs past the
            // bottom clamp to zero.
            let x_top3 = Int::from_limbs(&[
                (n + j).checked_sub(2).map_or(0, |i| rem.digit(i)),
                rem.digit(n + j - 1),
                rem.digit(n + j),
            ]);
            while Int::cmp_mag(&y_top2.mul_digit(qhat as Digit)?, &x_top3) == Ordering::Greater {
                qhat -= 1;
            }

            // Subtract qhat * y * B^j; the estimate is off by at most one,
            // so a single add-back corrects an overshoot.
            let mut t = ys.mul_digit(qhat as Digit)?;
            t.lshd(j)?;
            rem = rem.sub(&t)?;
            if rem.is_negative() {
                let mut yb = ys.clone();
                yb.lshd(j)?;
                rem = rem.add(&yb)?;
                qhat -= 1;
            }
            q.digits[j] = qhat as Digit;
        }

        Int::clamp(&mut q);
        let r = rem.shr(shift)?;
        Ok((q, r))
    }

    /// Bit-serial long division on magnitudes; requires `x > y > 0`.
    /// Appends one dividend bit at a time to a running remainder and
    /// subtracts the divisor whenever it fits.
    #[cfg(feature = "small-division")]
    fn div_mag(x: &Int, y: &Int) -> Result<(Int, Int)> {
        let mut q = Int::new();
        q.grow(x.used)?;
        q.used = x.used;

        let mut r = Int::new();
        for i in (0..x.bit_len()).rev() {
            r = r.shl(1)?;
            if x.bit(i) {
                r.digits[0] |= 1;
            }
            if Int::cmp_mag(&r, y) != Ordering::Less {
                r = r.sub(y)?;
                let bit = (i % DIGIT_BITS as usize) as u32;
                q.digits[i / DIGIT_BITS as usize] |= (1 as Digit) << bit;
            }
        }

        Int::clamp(&mut q);
        Ok((q, r))
    }

    /// Divides the magnitude by a single limb `0 < d < B`.
    ///
    /// Walks the limbs from the top, keeping a two-limb window
    /// `w = w * B + x_i`, emitting `w / d` and carrying `w mod d`. The
    /// quotient keeps the sign of `self`; the returned remainder is the
    /// remainder of the magnitude.
    pub fn div_digit(&self, d: Digit) -> Result<(Int, Digit)> {
        if d == 0 {
            return Err(Error::Input);
        }
        debug_assert!(d <= DIGIT_MASK);

        let mut q = Int::new();
        q.grow(self.used)?;
        q.used = self.used;

        let dw = d as Word;
        let mut w: Word = 0;
        for i in (0..self.used).rev() {
            w = (w << DIGIT_BITS) | self.digits[i] as Word;
            q.digits[i] = (w / dw) as Digit;
            w %= dw;
        }
        q.sign = self.sign;
        Int::clamp(&mut q);
        Ok((q, w as Digit))
    }

    /// Halves the magnitude, preserving the sign.
    pub fn div_2(&self) -> Result<Int> {
        self.shr(1)
    }

    /// Logical left shift of the magnitude by `n` bits; sign is kept.
    pub fn shl(&self, n: usize) -> Result<Int> {
        if n == 0 || self.is_zero() {
            return Ok(self.clone());
        }

        let limbs = n / DIGIT_BITS as usize;
        let bits = (n % DIGIT_BITS as usize) as u32;

        let mut z = Int::new();
        z.grow(self.used + limbs + 1)?;
        for i in 0..self.used {
            z.digits[i + limbs] = self.digits[i];
        }
        z.used = self.used + limbs + 1;

        if bits > 0 {
            // Slide each limb up, catching the spill-over from below.
            let mut carry: Digit = 0;
            for i in limbs..z.used {
                let d = z.digits[i];
                z.digits[i] = ((d << bits) | carry) & DIGIT_MASK;
                carry = d >> (DIGIT_BITS - bits);
            }
        }

        z.sign = self.sign;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Logical right shift of the magnitude by `n` bits; sign is kept
    /// (zero becomes positive). Never grows the value.
    pub fn shr(&self, n: usize) -> Result<Int> {
        if n == 0 || self.is_zero() {
            return Ok(self.clone());
        }

        let limbs = n / DIGIT_BITS as usize;
        let bits = (n % DIGIT_BITS as usize) as u32;
        if limbs >= self.used {
            return Ok(Int::new());
        }

        let mut z = Int::new();
        z.grow(self.used - limbs)?;
        for i in 0..self.used - limbs {
            z.digits[i] = self.digits[i + limbs];
        }
        z.used = self.used - limbs;

        if bits > 0 {
            let mut carry: Digit = 0;
            for i in (0..z.used).rev() {
                let d = z.digits[i];
                z.digits[i] = (d >> bits) | carry;
                carry = (d << (DIGIT_BITS - bits)) & DIGIT_MASK;
            }
        }

        z.sign = self.sign;
        Int::clamp(&mut z);
        Ok(z)
    }

    /// Shifts up by `k` whole limbs in place (multiply by `B^k`).
    pub(crate) fn lshd(&mut self, k: usize) -> Result<()> {
        if k == 0 || self.is_zero() {
            return Ok(());
        }
        self.grow(self.used + k)?;
        for i in (0..self.used).rev() {
            self.digits[i + k] = self.digits[i];
        }
        for i in 0..k {
            self.digits[i] = 0;
        }
        self.used += k;
        Ok(())
    }

    /// Drops the bottom `k` limbs in place (divide by `B^k`).
    pub(crate) fn rshd(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        if k >= self.used {
            self.set_zero();
            return;
        }
        for i in 0..self.used - k {
            self.digits[i] = self.digits[i + k];
        }
        for i in self.used - k..self.used {
            self.digits[i] = 0;
        }
        self.used -= k;
        Int::clamp(self);
    }

    /// Computes `self ^ exp` for a non-negative exponent; `0^0 = 1`.
    ///
    /// Square-and-multiply over the exponent bits, most significant first.
    /// The multiply is computed on every step and only conditionally kept,
    /// so the branch leaves no multiply-shaped timing gap.
    pub fn pow(&self, exp: &Int) -> Result<Int> {
        if exp.is_negative() {
            return Err(Error::Input);
        }

        let mut z = Int::from_digit(1);
        for i in (0..exp.bit_len()).rev() {
            z = z.sqr()?;
            let t = z.mul(self)?;
            if exp.bit(i) {
                z = t;
            }
        }
        Ok(z)
    }
}
