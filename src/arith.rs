//! The additive and multiplicative engines. Addition owns the only carry loop
//! in the crate and subtraction the only borrow loop; every other operation
//! that needs either one funnels through these two.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{macros::forward_binop, BigInt};

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        // Differing signs reduce to a subtraction of magnitudes:
        // A + (-B) = A - |B|, and (-A) + B = B - |A|.
        if self.sign != rhs.sign {
            return if self.sign {
                self - &rhs.abs()
            } else {
                rhs - &self.abs()
            };
        }

        // Same sign: the result is as long as the longer operand, plus possibly
        // one limb for a carry that escapes the top.
        let mut solution = self.clone();
        solution.match_size_of(rhs);

        let mut carry = false;
        for i in 0..solution.limbs.len() {
            let term = rhs.limbs.get(i).copied().unwrap_or(0);
            let (sum, overflowed) = solution.limbs[i].overflowing_add(term);
            let (sum, carried) = sum.overflowing_add(carry as u64);
            solution.limbs[i] = sum;
            carry = overflowed || carried;
        }
        if carry {
            solution.limbs.push(1);
        }

        solution.trim_leading_zeroes();
        solution
    }
}

forward_binop!(impl Add, add);

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        // Crossing zero: subtraction is anticommutative, so flip the operands
        // and negate rather than handle a sign change mid-borrow.
        if self < rhs {
            return -&(rhs - self);
        }
        // Differing signs rewrite to an addition: A - (-B) = A + |B|. The other
        // mixed case ((-A) - B) always lands in the branch above.
        if self.sign != rhs.sign {
            return self + &rhs.abs();
        }

        // Same sign with self >= rhs. For non-negative operands the magnitudes
        // subtract in place; for negative ones the roles swap, since
        // (-A) - (-B) = |B| - |A|. Either way the result is non-negative.
        let (larger, smaller) = if self.sign { (self, rhs) } else { (rhs, self) };
        let mut solution = larger.clone();

        let mut borrow = false;
        for i in 0..solution.limbs.len() {
            let term = smaller.limbs.get(i).copied().unwrap_or(0);
            let (diff, underflowed) = solution.limbs[i].overflowing_sub(term);
            let (diff, borrowed) = diff.overflowing_sub(borrow as u64);
            solution.limbs[i] = diff;
            borrow = underflowed || borrowed;
        }
        // self >= rhs guarantees |larger| >= |smaller|, so no borrow survives
        debug_assert!(!borrow);

        solution.sign = true;
        solution.trim_leading_zeroes();
        solution
    }
}

forward_binop!(impl Sub, sub);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut negated = self.clone();
        if !negated.is_zero() {
            negated.sign = !negated.sign;
        }
        negated
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        // Schoolbook multiplication over bits: every set bit i of self turns
        // into a copy of rhs shifted up by i, accumulated into the total. The
        // bits needed for A*B never exceed bits(A) + bits(B), so the buffers
        // get sized to the combined limb count up front.
        let solution_size = self.limbs.len() + rhs.limbs.len();
        let mut solution = BigInt::zero();
        solution.match_size(solution_size);

        for i in 0..self.total_bits() {
            // Zero bits contribute nothing and can be skipped
            if !self.total_bit_at(i) {
                continue;
            }
            let mut intermediate = BigInt::zero();
            intermediate.match_size(solution_size);
            for j in 0..rhs.total_bits() {
                if rhs.total_bit_at(j) {
                    intermediate.set_total_bit(i + j, true);
                }
            }
            solution += intermediate;
            // The addition trims the accumulator, grow it back for indexing
            solution.match_size(solution_size);
        }

        solution.sign = self.sign == rhs.sign;
        solution.trim_leading_zeroes();
        solution
    }
}

forward_binop!(impl Mul, mul);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl BigInt {
    /// In-place `+= 1`, touching only the least significant limb when the step
    /// can't overflow it or flip the sign. Everything else falls back to the
    /// general addition path.
    pub fn inc(&mut self) {
        if self.sign && self.limbs[0] != u64::MAX {
            self.limbs[0] += 1;
        } else if !self.sign && self.limbs[0] != 0 {
            // Negative values step towards zero by shrinking the magnitude;
            // -1 lands exactly on zero and gets its sign canonicalized.
            self.limbs[0] -= 1;
            self.trim_leading_zeroes();
        } else {
            *self += BigInt::one();
        }
    }

    /// In-place `-= 1`, mirror image of [`BigInt::inc`].
    pub fn dec(&mut self) {
        if self.sign && self.limbs[0] != 0 {
            self.limbs[0] -= 1;
        } else if !self.sign && self.limbs[0] != u64::MAX {
            self.limbs[0] += 1;
        } else {
            *self -= BigInt::one();
        }
    }
}
