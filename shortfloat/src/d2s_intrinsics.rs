//! 64-bit multiply-shift primitives backed by the binary64 tables.
//!
//! Table entries are 128-bit values stored as `(lo, hi)` word pairs; the
//! widening 64x64 multiplies go through native `u128` arithmetic and must
//! stay inlineable.

use crate::d2s_full_table::{DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT};

pub(crate) const DOUBLE_POW5_INV_BITCOUNT: i32 = 122;
pub(crate) const DOUBLE_POW5_BITCOUNT: i32 = 121;

/// Computes `(m * factor) >> shift` for a 128-bit `factor` given as
/// `(lo, hi)`, keeping the full 192-bit product.
///
/// Precondition: `shift > 64`, and the result fits in 64 bits.
#[inline]
pub(crate) fn mul_shift(m: u64, factor: (u64, u64), shift: i32) -> u64 {
    debug_assert!(shift > 64);

    let lo = u128::from(m) * u128::from(factor.0);
    let hi = u128::from(m) * u128::from(factor.1);

    // hi + (lo >> 64) is exactly (m * factor) >> 64 and cannot overflow:
    // both products are below 2^128 - 2^65.
    let sum = (lo >> 64) + hi;
    let shifted = sum >> (shift - 64);
    debug_assert!(shifted <= u128::from(u64::MAX));
    shifted as u64
}

/// `floor(m / (5^q * 2^j) * 2^k)` for the table's fixed scale `k`.
#[inline]
pub(crate) fn mul_pow5_inv_div_pow2(m: u64, q: u32, j: i32) -> u64 {
    mul_shift(m, DOUBLE_POW5_INV_SPLIT[q as usize], j)
}

/// `floor(m * 5^i / 2^j)` scaled by the table's fixed precision.
#[inline]
pub(crate) fn mul_pow5_div_pow2(m: u64, i: u32, j: i32) -> u64 {
    mul_shift(m, DOUBLE_POW5_SPLIT[i as usize], j)
}

/// Returns the largest `p` such that 5^p divides `v`.
///
/// Precondition: `v != 0`.
pub(crate) fn pow5_factor(mut v: u64) -> u32 {
    debug_assert!(v != 0);
    let mut n = 0;
    loop {
        let (q, r) = (v / 5, v % 5);
        if r != 0 {
            return n;
        }
        v = q;
        n += 1;
    }
}

/// Reports whether `v` is divisible by 5^p.
pub(crate) fn multiple_of_power_of_5(v: u64, p: u32) -> bool {
    pow5_factor(v) >= p
}

/// Reports whether `v` is divisible by 2^p.
pub(crate) fn multiple_of_power_of_2(v: u64, p: u32) -> bool {
    v.trailing_zeros() >= p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pow5bits;
    use num_bigint::BigUint;
    use rand::{RngCore, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn big(pair: (u64, u64)) -> BigUint {
        (BigUint::from(pair.1) << 64usize) + BigUint::from(pair.0)
    }

    #[test]
    fn mul_shift_matches_wide_reference() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x64_d2);
        for _ in 0..100_000 {
            let m = rng.next_u64();
            let factor = (rng.next_u64(), rng.next_u64());
            // Shifts of at least 128 guarantee the quotient fits in 64 bits.
            let shift = 128 + (rng.next_u32() % 64) as i32;
            let want = (big(factor) * BigUint::from(m)) >> shift as usize;
            assert_eq!(BigUint::from(mul_shift(m, factor, shift)), want);
        }
    }

    #[test]
    fn pow5_factor_counts_factors() {
        assert_eq!(pow5_factor(1), 0);
        assert_eq!(pow5_factor(5), 1);
        assert_eq!(pow5_factor(5u64.pow(27)), 27);
        assert_eq!(pow5_factor(5u64.pow(20) * 3), 20);
        assert_eq!(pow5_factor(7), 0);
        assert!(multiple_of_power_of_5(5u64.pow(22), 22));
        assert!(!multiple_of_power_of_5(5u64.pow(22), 23));
    }

    #[test]
    fn power_of_2_divisibility() {
        assert!(multiple_of_power_of_2(1 << 62, 62));
        assert!(!multiple_of_power_of_2(1 << 62, 63));
        assert!(multiple_of_power_of_2(0xf000, 12));
    }

    #[test]
    fn inverse_table_matches_formula() {
        for (q, &entry) in DOUBLE_POW5_INV_SPLIT.iter().enumerate() {
            let pow5 = BigUint::from(5u32).pow(q as u32);
            let num =
                BigUint::from(1u32) << (DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1) as usize;
            let want = (&num + &pow5 - BigUint::from(1u32)) / &pow5;
            assert_eq!(big(entry), want, "q = {q}");
        }
    }

    #[test]
    fn forward_table_matches_formula() {
        for (i, &entry) in DOUBLE_POW5_SPLIT.iter().enumerate() {
            let pow5 = BigUint::from(5u32).pow(i as u32);
            let shift = pow5bits(i as i32) - DOUBLE_POW5_BITCOUNT;
            let want = if shift >= 0 {
                &pow5 >> shift as usize
            } else {
                &pow5 << (-shift) as usize
            };
            assert_eq!(big(entry), want, "i = {i}");
        }
    }
}
