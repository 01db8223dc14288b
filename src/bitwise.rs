//! The bitwise and shift engine.
//!
//! All of these operate on the sign-magnitude representation's bits directly,
//! not on a two's-complement encoding, so negative operands do not behave like
//! the primitive signed types would (`!-1` is not zero here). The sign of a
//! binary result is positive when the operand signs match and negative
//! otherwise, with zero forced back to positive.
//!
//! `<<` and `>>` truncate within the value's current width; [`BigInt::shl_expanding`]
//! grows the limb vector instead so no high bits are ever lost.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::{BigInt, LIMB_BITS};

impl BitAnd for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt {
        let mut solution = self.clone();
        solution.sign = self.sign == rhs.sign;
        solution.match_size_of(rhs);
        // Limbs past the shorter operand are implicitly zero, and x & 0 = 0
        for i in 0..solution.limbs.len() {
            solution.limbs[i] &= rhs.limbs.get(i).copied().unwrap_or(0);
        }
        solution.trim_leading_zeroes();
        solution
    }
}

impl BitOr for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt {
        let mut solution = self.clone();
        solution.sign = self.sign == rhs.sign;
        solution.match_size_of(rhs);
        // Whichever operand is longer carries its high limbs through unchanged
        for i in 0..rhs.limbs.len() {
            solution.limbs[i] |= rhs.limbs[i];
        }
        solution.trim_leading_zeroes();
        solution
    }
}

impl BitXor for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> BigInt {
        let mut solution = self.clone();
        solution.sign = self.sign == rhs.sign;
        solution.match_size_of(rhs);
        for i in 0..rhs.limbs.len() {
            solution.limbs[i] ^= rhs.limbs[i];
        }
        solution.trim_leading_zeroes();
        solution
    }
}

crate::macros::forward_binop!(impl BitAnd, bitand);
crate::macros::forward_binop!(impl BitOr, bitor);
crate::macros::forward_binop!(impl BitXor, bitxor);

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        let mut solution = self.clone();
        for limb in &mut solution.limbs {
            *limb = !*limb;
        }
        solution.trim_leading_zeroes();
        solution
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !&self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, shift: usize) -> BigInt {
        if shift == 0 {
            return self.clone();
        }
        let total_bits = self.total_bits();
        // Shifting everything out leaves nothing behind
        if shift >= total_bits {
            return BigInt::zero();
        }

        let mut solution = self.clone();
        // Copy top-down so a bit is never overwritten before it is read
        for i in (shift..total_bits).rev() {
            solution.set_total_bit(i, self.total_bit_at(i - shift));
        }
        for i in 0..shift {
            solution.set_total_bit(i, false);
        }
        solution.trim_leading_zeroes();
        solution
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, shift: usize) -> BigInt {
        if shift == 0 {
            return self.clone();
        }
        let total_bits = self.total_bits();
        if shift >= total_bits {
            return BigInt::zero();
        }

        let mut solution = self.clone();
        for i in 0..total_bits - shift {
            solution.set_total_bit(i, self.total_bit_at(i + shift));
        }
        for i in total_bits - shift..total_bits {
            solution.set_total_bit(i, false);
        }
        solution.trim_leading_zeroes();
        solution
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, shift: usize) -> BigInt {
        &self << shift
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(self, shift: usize) -> BigInt {
        &self >> shift
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, shift: usize) {
        *self = &*self << shift;
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, shift: usize) {
        *self = &*self >> shift;
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        *self = &*self & rhs;
    }
}

impl BitAndAssign for BigInt {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = &*self & &rhs;
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        *self = &*self | rhs;
    }
}

impl BitOrAssign for BigInt {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = &*self | &rhs;
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        *self = &*self ^ rhs;
    }
}

impl BitXorAssign for BigInt {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = &*self ^ &rhs;
    }
}

impl BigInt {
    /// Expanding left shift: grows the limb vector first so no high bits fall
    /// off, unlike `<<` which truncates at the current width. This is what the
    /// division engine uses to scale its running remainder without overflow.
    pub fn shl_expanding(&self, shift: usize) -> BigInt {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }

        let mut solution = BigInt::zero();
        solution.match_size(self.limbs.len() + shift / LIMB_BITS + 1);
        solution.sign = self.sign;
        for i in 0..self.total_bits() {
            if self.total_bit_at(i) {
                solution.set_total_bit(i + shift, true);
            }
        }
        solution.trim_leading_zeroes();
        solution
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::Distribution, thread_rng, Rng};

    use super::*;

    #[test]
    fn and_or_xor_single_limb() {
        let a = BigInt::from(0b1100u64);
        let b = BigInt::from(0b1010u64);

        assert_eq!(&a & &b, BigInt::from(0b1000u64));
        assert_eq!(&a | &b, BigInt::from(0b1110u64));
        assert_eq!(&a ^ &b, BigInt::from(0b0110u64));
    }

    #[test]
    fn binary_ops_handle_length_mismatch() {
        let short = BigInt::from(u64::MAX);
        let long = BigInt {
            sign: true,
            limbs: vec![0b1010, 7, 9],
        };

        let and = &short & &long;
        assert_eq!(and.limbs, vec![0b1010]);

        let or = &short | &long;
        assert_eq!(or.limbs, vec![u64::MAX, 7, 9]);
        assert_eq!(&short | &long, &long | &short);

        let xor = &short ^ &long;
        assert_eq!(xor.limbs, vec![u64::MAX ^ 0b1010, 7, 9]);
        assert_eq!(&short ^ &long, &long ^ &short);
    }

    #[test]
    fn binary_op_sign_matches_operand_agreement() {
        let pos = BigInt::from(0b1100u64);
        let neg = BigInt::from(-0b1010i64);

        assert!((&pos & &pos).sign());
        assert!(!(&pos & &neg).sign());
        assert!((&neg | &neg).sign());
        assert!(!(&pos ^ &neg).sign());
        // Zero results are canonical regardless of operand signs
        assert!((&neg & &BigInt::from(0b0101i64)).sign());
    }

    #[test]
    fn not_inverts_each_limb() {
        assert_eq!(!BigInt::zero(), BigInt::from(u64::MAX));
        assert_eq!(!BigInt::from(u64::MAX), BigInt::zero());

        let n = BigInt {
            sign: true,
            limbs: vec![0, u64::MAX],
        };
        let inverted = !&n;
        assert_eq!(inverted.limbs, vec![u64::MAX]);

        // Magnitude semantics: the sign rides along untouched
        assert_eq!(!BigInt::from(-1i64), BigInt::new(u64::MAX - 1, false));
    }

    #[test]
    fn shl_truncates_at_current_width() {
        assert_eq!(BigInt::from(1u64) << 3, BigInt::from(8u64));
        // The top bit falls off a single-limb value
        assert_eq!(BigInt::from(3u64) << 63, BigInt::from(1u64 << 63));
        // Shifting by the full width or more leaves zero
        assert_eq!(BigInt::from(u64::MAX) << 64, BigInt::zero());
        assert_eq!(BigInt::from(u64::MAX) << 200, BigInt::zero());
        assert_eq!(BigInt::from(5u64) << 0, BigInt::from(5u64));
    }

    #[test]
    fn shr_truncates_at_current_width() {
        assert_eq!(BigInt::from(8u64) >> 3, BigInt::from(1u64));
        assert_eq!(BigInt::from(7u64) >> 1, BigInt::from(3u64));
        assert_eq!(BigInt::from(u64::MAX) >> 64, BigInt::zero());
        assert_eq!(BigInt::from(u64::MAX) >> 200, BigInt::zero());

        // Crossing a limb boundary downwards
        let two_to_64 = BigInt::from(u64::MAX) + 1u64;
        assert_eq!(&two_to_64 >> 1, BigInt::from(1u64 << 63));
        assert_eq!(&two_to_64 >> 64, BigInt::one());
    }

    #[test]
    fn shift_roundtrip_clears_top_bits() {
        let mut rng = thread_rng();
        let dist = Uniform::new(BigInt::one(), BigInt::one().shl_expanding(192));

        for _ in 0..100 {
            let a = dist.sample(&mut rng);
            let width = a.total_bits();
            let k = rng.gen_range(0..width);

            // a << k >> k equals a with its top k bits cleared
            let mut expected = a.clone();
            for i in width - k..width {
                expected.set_total_bit(i, false);
            }
            expected.trim_leading_zeroes();

            assert_eq!(&(&a << k) >> k, expected);
        }
    }

    #[test]
    fn shl_expanding_keeps_every_bit() {
        // 1 << 64 overflows a single limb; the expanding form grows instead
        let shifted = BigInt::one().shl_expanding(64);
        assert_eq!(shifted.limbs, vec![0, 1]);
        assert_eq!(shifted, BigInt::from(u64::MAX) + 1u64);

        let shifted = BigInt::from(0b11u64).shl_expanding(63);
        assert_eq!(shifted.limbs, vec![1 << 63, 1]);

        // Matches the truncating shift whenever nothing would truncate
        assert_eq!(BigInt::from(5u64).shl_expanding(2), BigInt::from(5u64) << 2);

        // Sign and zero behave like the other shifts
        assert_eq!(BigInt::zero().shl_expanding(100), BigInt::zero());
        assert_eq!(
            BigInt::from(-1i64).shl_expanding(64).limbs,
            vec![0, 1]
        );
        assert!(!BigInt::from(-1i64).shl_expanding(64).sign());
    }

    #[test]
    fn shifted_negative_keeps_sign() {
        assert_eq!(BigInt::from(-4i64) >> 1, BigInt::from(-2i64));
        assert_eq!(BigInt::from(-4i64) << 1, BigInt::from(-8i64));
        // A shift that drops every bit still yields canonical zero
        assert!((BigInt::from(-4i64) << 64).sign());
    }
}
