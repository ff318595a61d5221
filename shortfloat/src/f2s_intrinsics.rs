//! 32-bit multiply-shift primitives backed by the binary32 tables.

use crate::f2s_full_table::{FLOAT_POW5_INV_SPLIT, FLOAT_POW5_SPLIT};

pub(crate) const FLOAT_POW5_INV_BITCOUNT: i32 = 59;
pub(crate) const FLOAT_POW5_BITCOUNT: i32 = 61;

/// Computes `(m * factor) >> shift`, keeping the full 96-bit product.
///
/// Precondition: `shift > 32`, and the result fits in 32 bits.
pub(crate) fn mul_shift(m: u32, factor: u64, shift: i32) -> u32 {
    debug_assert!(shift > 32);

    let bits0 = u64::from(m) * (factor & 0xffff_ffff);
    let bits1 = u64::from(m) * (factor >> 32);

    let sum = (bits0 >> 32) + bits1;
    let shifted = sum >> (shift - 32);
    debug_assert!(shifted <= u64::from(u32::MAX));
    shifted as u32
}

/// `floor(m / (5^q * 2^j) * 2^k)` for the table's fixed scale `k`.
pub(crate) fn mul_pow5_inv_div_pow2(m: u32, q: u32, j: i32) -> u32 {
    mul_shift(m, FLOAT_POW5_INV_SPLIT[q as usize], j)
}

/// `floor(m * 5^i / 2^j)` scaled by the table's fixed precision.
pub(crate) fn mul_pow5_div_pow2(m: u32, i: u32, j: i32) -> u32 {
    mul_shift(m, FLOAT_POW5_SPLIT[i as usize], j)
}

/// Returns the largest `p` such that 5^p divides `v`.
///
/// Precondition: `v != 0`.
pub(crate) fn pow5_factor(mut v: u32) -> u32 {
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
pub(crate) fn multiple_of_power_of_5(v: u32, p: u32) -> bool {
    pow5_factor(v) >= p
}

/// Reports whether `v` is divisible by 2^p.
pub(crate) fn multiple_of_power_of_2(v: u32, p: u32) -> bool {
    v.trailing_zeros() >= p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pow5bits;
    use num_bigint::BigUint;
    use rand::{RngCore, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn mul_shift_matches_wide_reference() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x32_f2);
        for _ in 0..100_000 {
            let m = rng.next_u32();
            let factor = rng.next_u64();
            // Shifts of at least 64 guarantee the quotient fits in 32 bits.
            let shift = 64 + (rng.next_u32() % 32) as i32;
            let want = ((u128::from(m) * u128::from(factor)) >> shift) as u32;
            assert_eq!(mul_shift(m, factor, shift), want);
        }
    }

    #[test]
    fn pow5_factor_counts_factors() {
        assert_eq!(pow5_factor(1), 0);
        assert_eq!(pow5_factor(5), 1);
        assert_eq!(pow5_factor(25), 2);
        assert_eq!(pow5_factor(125 * 7), 3);
        assert_eq!(pow5_factor(5u32.pow(13)), 13);
        assert_eq!(pow5_factor(2), 0);
        assert!(multiple_of_power_of_5(625, 4));
        assert!(!multiple_of_power_of_5(625, 5));
    }

    #[test]
    fn power_of_2_divisibility() {
        assert!(multiple_of_power_of_2(8, 3));
        assert!(!multiple_of_power_of_2(8, 4));
        assert!(multiple_of_power_of_2(12, 2));
        assert!(multiple_of_power_of_2(1 << 31, 31));
    }

    #[test]
    fn inverse_table_matches_formula() {
        for (q, &entry) in FLOAT_POW5_INV_SPLIT.iter().enumerate() {
            let pow5 = BigUint::from(5u32).pow(q as u32);
            let num =
                BigUint::from(1u32) << (FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1) as usize;
            let want = (&num + &pow5 - BigUint::from(1u32)) / &pow5;
            assert_eq!(BigUint::from(entry), want, "q = {q}");
        }
    }

    #[test]
    fn forward_table_matches_formula() {
        for (i, &entry) in FLOAT_POW5_SPLIT.iter().enumerate() {
            let pow5 = BigUint::from(5u32).pow(i as u32);
            let shift = pow5bits(i as i32) - FLOAT_POW5_BITCOUNT;
            let want = if shift >= 0 {
                &pow5 >> shift as usize
            } else {
                &pow5 << (-shift) as usize
            };
            assert_eq!(BigUint::from(entry), want, "i = {i}");
        }
    }
}
