//! Conversion of binary64 values to the shortest round-tripping decimal.
//!
//! Structurally the same five steps as the binary32 path, widened to 64-bit
//! intermediates and 128-bit table entries. The two are kept as separate
//! monomorphic modules so each stays auditable against its own constants.

use crate::common::{log10_pow2, log10_pow5, pow5bits};
use crate::d2s_intrinsics::{
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT, mul_pow5_div_pow2, mul_pow5_inv_div_pow2,
    multiple_of_power_of_2, multiple_of_power_of_5,
};

pub(crate) const DOUBLE_MANTISSA_BITS: u32 = 52;
pub(crate) const DOUBLE_EXPONENT_BITS: u32 = 11;
const DOUBLE_BIAS: i32 = 1023;

/// A decimal value `mantissa * 10^exponent` with at most 17 significant
/// digits, the shortest form that parses back to the original binary64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingDecimal64 {
    pub mantissa: u64,
    pub exponent: i32,
}

/// Runs the conversion on raw mantissa and exponent fields, sign already
/// stripped and zero/non-finite already excluded by the caller.
pub(crate) fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    // Step 1: decode. The extra -2 leaves room for the interval bounds on
    // 4 * m2 below.
    let (e2, m2) = if ieee_exponent == 0 {
        (
            1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            ieee_mantissa,
        )
    } else {
        (
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    let even = m2 & 1 == 0;
    let accept_bounds = even;

    // Step 2: the halfway-open interval of values rounding to this float.
    let mv = 4 * m2;
    let mp = 4 * m2 + 2;
    let mm_shift = u64::from(ieee_mantissa != 0 || ieee_exponent <= 1);
    let mm = 4 * m2 - 1 - mm_shift;

    // Step 3: project onto a power-of-ten base using 128-bit arithmetic.
    let mut vr: u64;
    let mut vp: u64;
    let mut vm: u64;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let mut last_removed_digit = 0u8;
    if e2 >= 0 {
        let q = log10_pow2(e2);
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_pow5_inv_div_pow2(mv, q, i);
        vp = mul_pow5_inv_div_pow2(mp, q, i);
        vm = mul_pow5_inv_div_pow2(mm, q, i);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            // Step 4 will not loop, but rounding still needs one removed
            // digit; take it from the scaled value at q - 1.
            let l = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32 - 1) - 1;
            last_removed_digit =
                (mul_pow5_inv_div_pow2(mv, q - 1, -e2 + q as i32 - 1 + l) % 10) as u8;
        }
        if q <= 21 {
            // 5^22 no longer fits the 55 bits available in mv, so larger q
            // can never divide. At most one of mv, mp and mm can be a
            // multiple of 5^q.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mm, q);
            } else if multiple_of_power_of_5(mp, q) {
                vp -= 1;
            }
        }
    } else {
        let q = log10_pow5(-e2);
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        vr = mul_pow5_div_pow2(mv, i as u32, j);
        vp = mul_pow5_div_pow2(mp, i as u32, j);
        vm = mul_pow5_div_pow2(mm, i as u32, j);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            let j = q as i32 - 1 - (pow5bits(i + 1) - DOUBLE_POW5_BITCOUNT);
            last_removed_digit = (mul_pow5_div_pow2(mv, (i + 1) as u32, j) % 10) as u8;
        }
        if q <= 1 {
            // mv = 4 * m2 always has at least two trailing zero bits.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp -= 1;
            }
        } else if q < 63 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q - 1);
        }
    }

    // Step 4: find the shortest decimal in the interval.
    // TODO: extract digits two at a time through a 00..99 pair table
    // instead of one `/ 10` + `% 10` per iteration.
    let mut removed = 0i32;
    let out = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~4.0%).
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros = vm_is_trailing_zeros && vm % 10 == 0;
            vr_is_trailing_zeros = vr_is_trailing_zeros && last_removed_digit == 0;
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros = vr_is_trailing_zeros && last_removed_digit == 0;
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Exact halfway case: round to even.
            last_removed_digit = 4;
        }
        // vr + 1 if vr sits on the excluded lower bound or rounds up.
        vr + u64::from(
            (vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5,
        )
    } else {
        // Common case (~96.0%), no trailing-zero bookkeeping.
        while vp / 10 > vm / 10 {
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        vr + u64::from(vr == vm || last_removed_digit >= 5)
    };

    FloatingDecimal64 {
        mantissa: out,
        exponent: e10 + removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(f: f64) -> FloatingDecimal64 {
        let bits = f.to_bits();
        let mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let exponent = ((bits >> DOUBLE_MANTISSA_BITS) as u32) & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);
        d2d(mantissa, exponent)
    }

    fn fd(mantissa: u64, exponent: i32) -> FloatingDecimal64 {
        FloatingDecimal64 {
            mantissa,
            exponent,
        }
    }

    #[test]
    fn exact_powers_and_simple_values() {
        assert_eq!(dec(1.0), fd(1, 0));
        assert_eq!(dec(10.0), fd(1, 1));
        assert_eq!(dec(0.3), fd(3, -1));
        assert_eq!(dec(1e23), fd(1, 23));
        assert_eq!(dec(123456.7), fd(1_234_567, -1));
    }

    #[test]
    fn seventeen_digit_mantissas() {
        assert_eq!(dec(f64::MAX), fd(17_976_931_348_623_157, 292));
        assert_eq!(dec(f64::MIN_POSITIVE), fd(22_250_738_585_072_014, -324));
    }

    #[test]
    fn subnormals() {
        assert_eq!(dec(5e-324), fd(5, -324));
        assert_eq!(dec(f64::from_bits(1)), fd(5, -324));
    }

    #[test]
    fn near_power_of_ten_boundaries() {
        // The doubles straddling 1e23.
        assert_eq!(
            dec(99999999999999974834176.0),
            fd(9_999_999_999_999_997, 7)
        );
        assert_eq!(
            dec(100000000000000008388608.0),
            fd(10_000_000_000_000_001, 7)
        );
    }
}
