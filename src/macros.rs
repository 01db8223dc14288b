use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::BigInt;

// The binary operators are implemented once over a pair of references; this
// generates the owned and mixed-ownership variants that delegate to it.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

pub(crate) use forward_binop;

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    Self::new(n as u64, true)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(n: $t) -> Self {
                    Self::new(n.unsigned_abs() as u64, n >= 0)
                }
            }
        )+
    };
}

impl_from_unsigned!(u64, u32, u16, u8);
impl_from_signed!(i64, i32, i16, i8);

// Macro to generate the cross-type operators for each int type, so expressions
// like `5u64 + n` and `n + 5u64` both work and agree with the BigInt-only forms.
#[macro_export]
macro_rules! bigint_math_impl {
    ( $t:ty ) => {
        impl Add<$t> for $crate::BigInt {
            type Output = Self;

            fn add(self, rhs: $t) -> Self::Output {
                &self + &$crate::BigInt::from(rhs)
            }
        }

        impl Add<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn add(self, rhs: $crate::BigInt) -> Self::Output {
                &$crate::BigInt::from(self) + &rhs
            }
        }

        impl AddAssign<$t> for $crate::BigInt {
            fn add_assign(&mut self, rhs: $t) {
                *self = &*self + &$crate::BigInt::from(rhs)
            }
        }

        impl Sub<$t> for $crate::BigInt {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self::Output {
                &self - &$crate::BigInt::from(rhs)
            }
        }

        impl Sub<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn sub(self, rhs: $crate::BigInt) -> Self::Output {
                &$crate::BigInt::from(self) - &rhs
            }
        }

        impl SubAssign<$t> for $crate::BigInt {
            fn sub_assign(&mut self, rhs: $t) {
                *self = &*self - &$crate::BigInt::from(rhs)
            }
        }

        impl Mul<$t> for $crate::BigInt {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                &self * &$crate::BigInt::from(rhs)
            }
        }

        impl Mul<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn mul(self, rhs: $crate::BigInt) -> Self::Output {
                &$crate::BigInt::from(self) * &rhs
            }
        }

        impl MulAssign<$t> for $crate::BigInt {
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * &$crate::BigInt::from(rhs)
            }
        }

        impl Div<$t> for $crate::BigInt {
            type Output = Self;

            fn div(self, rhs: $t) -> Self::Output {
                &self / &$crate::BigInt::from(rhs)
            }
        }

        impl Div<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn div(self, rhs: $crate::BigInt) -> Self::Output {
                &$crate::BigInt::from(self) / &rhs
            }
        }

        impl DivAssign<$t> for $crate::BigInt {
            fn div_assign(&mut self, rhs: $t) {
                *self = &*self / &$crate::BigInt::from(rhs)
            }
        }

        impl Rem<$t> for $crate::BigInt {
            type Output = Self;

            fn rem(self, rhs: $t) -> Self::Output {
                &self % &$crate::BigInt::from(rhs)
            }
        }

        impl Rem<$crate::BigInt> for $t {
            type Output = $crate::BigInt;

            fn rem(self, rhs: $crate::BigInt) -> Self::Output {
                &$crate::BigInt::from(self) % &rhs
            }
        }

        impl RemAssign<$t> for $crate::BigInt {
            fn rem_assign(&mut self, rhs: $t) {
                *self = &*self % &$crate::BigInt::from(rhs)
            }
        }
    };
}

bigint_math_impl!(u64);
bigint_math_impl!(u32);
bigint_math_impl!(u16);
bigint_math_impl!(u8);
bigint_math_impl!(i64);
bigint_math_impl!(i32);
bigint_math_impl!(i16);
bigint_math_impl!(i8);
