//! This module contains the stepping traits, the closest thing a Rust value
//! type gets to `++` and `--`.

use crate::BigInt;

/// The value immediately above the current one.
pub trait Succ {
    fn succ(self) -> Self;
}

/// The value immediately below the current one.
pub trait Pred {
    fn pred(self) -> Self;
}

impl Succ for BigInt {
    fn succ(mut self) -> Self {
        self.inc();
        self
    }
}

impl Pred for BigInt {
    fn pred(mut self) -> Self {
        self.dec();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succ_and_pred_are_inverses() {
        let n = BigInt::from(41u64);
        assert_eq!(n.clone().succ(), BigInt::from(42u64));
        assert_eq!(n.clone().succ().pred(), n);

        // Both step correctly across zero
        assert_eq!(BigInt::from(-1i64).succ(), BigInt::zero());
        assert_eq!(BigInt::zero().pred(), BigInt::from(-1i64));

        // And across a limb boundary
        let max = BigInt::from(u64::MAX);
        assert_eq!(max.clone().succ().pred(), max);
    }
}
