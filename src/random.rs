//! Uniform random generation for `BigInt`, mostly useful for tests and
//! benchmarks. Sampling rejects candidates drawn from the bit-width of the
//! requested span, so every value in the range really is equally likely
//! (unlike a naive random-limb-count approach, which would skew heavily
//! towards the widest values).

use std::cmp::Ordering;

use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformSampler},
    Rng,
};

use crate::{BigInt, LIMB_BITS};

/// Uniform sampler over a `[low, high)` or `[low, high]` range of `BigInt`s.
pub struct UniformBigInt {
    low: BigInt,
    /// `high - low`, always non-negative
    span: BigInt,
    inclusive: bool,
}

/// A non-negative value with `bits` random bits, high bits of the top limb
/// masked off.
fn gen_bits<R: Rng + ?Sized>(rng: &mut R, bits: usize) -> BigInt {
    let limb_count = bits.div_ceil(LIMB_BITS);
    let mut limbs: Vec<u64> = (0..limb_count).map(|_| rng.gen()).collect();

    let excess = limb_count * LIMB_BITS - bits;
    if excess > 0 {
        if let Some(top) = limbs.last_mut() {
            *top &= u64::MAX >> excess;
        }
    }

    let mut sample = BigInt { sign: true, limbs };
    sample.trim_leading_zeroes();
    sample
}

impl UniformSampler for UniformBigInt {
    type X = BigInt;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());
        assert!(high > low, "UniformBigInt requires high > low");

        UniformBigInt {
            span: &high - &low,
            low,
            inclusive: false,
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow().clone(), high.borrow().clone());
        assert!(high >= low, "UniformBigInt requires high >= low");

        UniformBigInt {
            span: &high - &low,
            low,
            inclusive: true,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        if self.span.is_zero() {
            // Only reachable for an inclusive single-value range
            return self.low.clone();
        }

        // Draw offsets of the span's bit-width until one lands inside it. The
        // span occupies at least half of that width's value space, so this
        // takes fewer than two attempts on average.
        let bits = self.span.bit_len();
        loop {
            let offset = gen_bits(rng, bits);
            let accepted = match offset.cmp_magnitude(&self.span) {
                Ordering::Less => true,
                Ordering::Equal => self.inclusive,
                Ordering::Greater => false,
            };
            if accepted {
                return &self.low + &offset;
            }
        }
    }
}

impl SampleUniform for BigInt {
    type Sampler = UniformBigInt;
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = thread_rng();
        let low = BigInt::from(-1000i64);
        let high = BigInt::one().shl_expanding(100);
        let dist = Uniform::new(low.clone(), high.clone());

        for _ in 0..1000 {
            let sample = dist.sample(&mut rng);
            assert!(sample >= low);
            assert!(sample < high);
        }
    }

    #[test]
    fn inclusive_range_can_hit_both_ends() {
        let mut rng = thread_rng();
        let dist = Uniform::new_inclusive(BigInt::zero(), BigInt::from(3u64));

        let mut seen = [false; 4];
        for _ in 0..1000 {
            let sample = dist.sample(&mut rng);
            let value = u64::try_from(&sample).unwrap();
            seen[value as usize] = true;
        }
        // A thousand draws missing any of four values would be astronomical
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn degenerate_inclusive_range_returns_low() {
        let mut rng = thread_rng();
        let five = BigInt::from(5u64);
        let dist = Uniform::new_inclusive(five.clone(), five.clone());
        assert_eq!(dist.sample(&mut rng), five);
    }

    #[test]
    fn wide_samples_reach_multiple_limbs() {
        let mut rng = thread_rng();
        let dist = Uniform::new(
            BigInt::one().shl_expanding(150),
            BigInt::one().shl_expanding(190),
        );

        let sample = dist.sample(&mut rng);
        assert!(sample.bit_len() > 150);
    }
}
