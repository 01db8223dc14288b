use std::cmp::Ordering;

pub mod error;
pub mod random;
pub mod traits;

mod arith;
mod bitwise;
mod convert;
mod divide;
mod macros;

use error::{BigIntError, BigIntErrorKind};

/// Width of one limb in bits. The limb type should hopefully never change but
/// everything below addresses bits through this constant rather than a bare 64.
pub(crate) const LIMB_BITS: usize = u64::BITS as usize;

/// An arbitrarily large signed integer. Intended only for values that can't fit
/// in the primitive types, as it is inherently slower than them.
///
/// The value is stored sign-magnitude: a sign flag (`true` meaning non-negative)
/// plus a little-endian vector of `u64` limbs, index 0 being least significant.
/// Every public operation leaves the value canonical: no redundant
/// most-significant zero limbs, at least one limb, and zero always positive.
///
/// Binary operators are implemented over references and return fresh values;
/// only the compound-assignment forms mutate in place.
///
/// # Examples
/// ```
/// use bigint::BigInt;
///
/// let a = BigInt::from(17u64);
/// let b = BigInt::from(5u64);
///
/// assert_eq!(&a + &b, BigInt::from(22u64));
/// assert_eq!(&a / &b, BigInt::from(3u64));
/// assert_eq!(&a % &b, BigInt::from(2u64));
/// assert_eq!(-&a % &b, BigInt::from(-2i64));
///
/// let big = BigInt::from(u64::MAX) + 1u64;
/// assert_eq!(big.to_string(), "18446744073709551616");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    /// `true` for non-negative values. Zero is always stored with `sign = true`.
    pub(crate) sign: bool,
    /// Little-endian magnitude. Never empty; zero is a single 0 limb.
    pub(crate) limbs: Vec<u64>,
}

impl BigInt {
    /// Create a `BigInt` from a magnitude and an explicit sign (`true` for
    /// non-negative). A zero magnitude ignores the requested sign, there is no
    /// negative zero.
    pub fn new(magnitude: u64, sign: bool) -> Self {
        Self {
            sign: sign || magnitude == 0,
            limbs: vec![magnitude],
        }
    }

    pub fn zero() -> Self {
        Self::new(0, true)
    }

    pub fn one() -> Self {
        Self::new(1, true)
    }

    /// `true` when the value is non-negative.
    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Self {
            sign: true,
            limbs: self.limbs.clone(),
        }
    }

    /// Whether the value can be narrowed to a `u64` without losing anything.
    /// Negative values never fit since the sign has nowhere to go.
    pub fn fits_u64(&self) -> bool {
        self.sign && self.limbs.len() == 1
    }

    /*
     * Representation upkeep. Every mutating operation finishes by restoring the
     * canonical form through `trim_leading_zeroes`.
     */

    /// Drop redundant most-significant zero limbs, leaving at least one limb.
    /// Also re-canonicalizes the sign of zero, so callers that may have produced
    /// a "negative zero" don't need a separate fixup.
    pub(crate) fn trim_leading_zeroes(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.is_zero() {
            self.sign = true;
        }
    }

    /// Grow (never shrink) the limb vector to at least `len` limbs by appending
    /// zeroes. Run before in-place bit operations so indexing is always safe.
    pub(crate) fn match_size(&mut self, len: usize) {
        if self.limbs.len() < len {
            self.limbs.resize(len, 0);
        }
    }

    pub(crate) fn match_size_of(&mut self, other: &Self) {
        self.match_size(other.limbs.len());
    }

    /*
     * Bit addressing. Shifting, multiplication and division all go through the
     * global-index accessors so they never have to think about limb boundaries.
     */

    /// The `index`th bit of a single limb.
    pub(crate) fn bit_at(limb: u64, index: usize) -> bool {
        (limb >> index) & 1 == 1
    }

    /// Set the `index`th bit of a single limb.
    pub(crate) fn set_bit(limb: &mut u64, index: usize, bit: bool) {
        if Self::bit_at(*limb, index) != bit {
            *limb ^= 1 << index;
        }
    }

    /// The bit at a global index across the whole limb vector.
    pub(crate) fn total_bit_at(&self, index: usize) -> bool {
        Self::bit_at(self.limbs[index / LIMB_BITS], index % LIMB_BITS)
    }

    /// Set the bit at a global index across the whole limb vector.
    pub(crate) fn set_total_bit(&mut self, index: usize, bit: bool) {
        Self::set_bit(&mut self.limbs[index / LIMB_BITS], index % LIMB_BITS, bit);
    }

    /// Total addressable width in bits, including any leading zero bits of the
    /// top limb.
    pub(crate) fn total_bits(&self) -> usize {
        self.limbs.len() * LIMB_BITS
    }

    /// Number of significant bits in the magnitude; 0 for zero.
    pub(crate) fn bit_len(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            let top = self.limbs[self.limbs.len() - 1];
            self.limbs.len() * LIMB_BITS - top.leading_zeros() as usize
        }
    }

    /// Compare magnitudes only, ignoring the signs. More limbs means a larger
    /// magnitude since the representation is canonical; equal lengths fall back
    /// to a most-significant-first limb scan.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => (),
            ord => return ord,
        }
        for i in (0..self.limbs.len()).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Any non-negative value is greater than any negative one, so differing
        // signs settle it outright.
        match (self.sign, other.sign) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => (),
        }
        // Same sign: a bigger magnitude means a bigger value when positive and
        // a smaller one when negative.
        let by_magnitude = self.cmp_magnitude(other);
        if self.sign {
            by_magnitude
        } else {
            by_magnitude.reverse()
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortcut equality against a plain `u64` for common checks, without building
/// a whole `BigInt`. Negative values never compare equal.
impl PartialEq<u64> for BigInt {
    fn eq(&self, other: &u64) -> bool {
        self.sign && self.limbs.len() == 1 && self.limbs[0] == *other
    }
}

/// Narrowing conversion to the limb type. Fails with `LossyConversion` for
/// multi-limb or negative values; check `fits_u64` first to avoid the error
/// path.
impl TryFrom<&BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.fits_u64() {
            Ok(value.limbs[0])
        } else {
            Err(BigIntError::new(
                BigIntErrorKind::LossyConversion,
                format!("value with {} limbs does not fit in u64", value.limbs.len()),
            ))
        }
    }
}
