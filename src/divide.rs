//! The division engine. `/` and `%` share one binary long-division routine
//! that produces the quotient and remainder in a single pass; each operator
//! keeps the component it wants. Signs follow the truncated-division
//! convention of the primitive integer types: the quotient's sign is the XOR
//! of the operand signs and the remainder takes the dividend's sign.

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::{
    error::{BigIntError, BigIntErrorKind, BigIntResult},
    macros::forward_binop,
    BigInt,
};

impl BigInt {
    /// Classic binary long division over the magnitudes, ignoring both signs.
    /// Callers guarantee the divisor's magnitude is non-zero.
    pub(crate) fn div_rem_magnitude(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
        // Dividing by one is the identity on the magnitude
        if divisor.limbs.len() == 1 && divisor.limbs[0] == 1 {
            return (dividend.abs(), BigInt::zero());
        }
        // Integer division sends every |A| < |B| case to 0 remainder |A|
        if dividend.cmp_magnitude(divisor) == Ordering::Less {
            return (BigInt::zero(), dividend.abs());
        }

        let divisor = divisor.abs();
        let mut quotient = BigInt::zero();
        let mut remainder = BigInt::zero();
        quotient.match_size_of(dividend);
        remainder.match_size_of(&divisor);

        // Walk the dividend's bits from most to least significant, pulling each
        // one in as the new low bit of the running remainder. The expanding
        // shift grows the remainder's buffer whenever its top bit is occupied,
        // so nothing is ever truncated off.
        for i in (0..dividend.total_bits()).rev() {
            remainder = remainder.shl_expanding(1);
            remainder.set_total_bit(0, dividend.total_bit_at(i));
            if remainder.cmp_magnitude(&divisor) != Ordering::Less {
                remainder = &remainder - &divisor;
                quotient.set_total_bit(i, true);
            }
        }

        quotient.trim_leading_zeroes();
        remainder.trim_leading_zeroes();
        (quotient, remainder)
    }

    /// Quotient and remainder in one pass, or `DivideByZero` for a zero
    /// divisor. `quotient * divisor + remainder == self` holds for every
    /// accepted divisor.
    pub fn checked_div_rem(&self, divisor: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::new(
                BigIntErrorKind::DivideByZero,
                "division by zero",
            ));
        }

        let (mut quotient, mut remainder) = Self::div_rem_magnitude(self, divisor);
        if self.sign != divisor.sign && !quotient.is_zero() {
            quotient.sign = false;
        }
        // Truncated convention: the remainder carries the dividend's sign
        if !self.sign && !remainder.is_zero() {
            remainder.sign = false;
        }
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> BigIntResult<BigInt> {
        Ok(self.checked_div_rem(divisor)?.0)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> BigIntResult<BigInt> {
        Ok(self.checked_div_rem(divisor)?.1)
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Attempt to divide BigInt by zero"),
        }
    }
}

forward_binop!(impl Div, div);

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("Attempt to take BigInt remainder by zero"),
        }
    }
}

forward_binop!(impl Rem, rem);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}
