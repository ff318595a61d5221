//! Conversion of binary32 values to the shortest round-tripping decimal.

use crate::common::{log10_pow2, log10_pow5, pow5bits};
use crate::f2s_intrinsics::{
    FLOAT_POW5_BITCOUNT, FLOAT_POW5_INV_BITCOUNT, mul_pow5_div_pow2, mul_pow5_inv_div_pow2,
    multiple_of_power_of_2, multiple_of_power_of_5,
};

pub(crate) const FLOAT_MANTISSA_BITS: u32 = 23;
pub(crate) const FLOAT_EXPONENT_BITS: u32 = 8;
const FLOAT_BIAS: i32 = 127;

/// A decimal value `mantissa * 10^exponent` with at most 9 significant
/// digits, the shortest form that parses back to the original binary32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingDecimal32 {
    pub mantissa: u32,
    pub exponent: i32,
}

/// Runs the conversion on raw mantissa and exponent fields, sign already
/// stripped and zero/non-finite already excluded by the caller.
pub(crate) fn f2d(ieee_mantissa: u32, ieee_exponent: u32) -> FloatingDecimal32 {
    // Step 1: decode. The extra -2 leaves room for the interval bounds on
    // 4 * m2 below.
    let (e2, m2) = if ieee_exponent == 0 {
        (1 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2, ieee_mantissa)
    } else {
        (
            ieee_exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2,
            (1u32 << FLOAT_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    let even = m2 & 1 == 0;
    let accept_bounds = even;

    // Step 2: the halfway-open interval of values rounding to this float.
    // The lower neighbour sits closer when the mantissa is a power of two.
    let mv = 4 * m2;
    let mp = 4 * m2 + 2;
    let mm_shift = u32::from(ieee_mantissa != 0 || ieee_exponent <= 1);
    let mm = 4 * m2 - 1 - mm_shift;

    // Step 3: project onto a power-of-ten base using 64-bit arithmetic.
    let mut vr: u32;
    let mut vp: u32;
    let mut vm: u32;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let mut last_removed_digit = 0u8;
    if e2 >= 0 {
        let q = log10_pow2(e2);
        e10 = q as i32;
        let k = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_pow5_inv_div_pow2(mv, q, i);
        vp = mul_pow5_inv_div_pow2(mp, q, i);
        vm = mul_pow5_inv_div_pow2(mm, q, i);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            // Step 4 will not loop, but rounding still needs one removed
            // digit. Recomputing at q - 1 keeps the arithmetic in 32 bits.
            let l = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32 - 1) - 1;
            last_removed_digit =
                (mul_pow5_inv_div_pow2(mv, q - 1, -e2 + q as i32 - 1 + l) % 10) as u8;
        }
        if q <= 9 {
            // At most one of mv, mp and mm can be a multiple of 5^q.
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
        let k = pow5bits(i) - FLOAT_POW5_BITCOUNT;
        let j = q as i32 - k;
        vr = mul_pow5_div_pow2(mv, i as u32, j);
        vp = mul_pow5_div_pow2(mp, i as u32, j);
        vm = mul_pow5_div_pow2(mm, i as u32, j);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            let j = q as i32 - 1 - (pow5bits(i + 1) - FLOAT_POW5_BITCOUNT);
            last_removed_digit = (mul_pow5_div_pow2(mv, (i + 1) as u32, j) % 10) as u8;
        }
        if q <= 1 {
            // mv = 4 * m2 always has at least two trailing zero bits.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift has one trailing zero bit iff
                // mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2 always has one.
                vp -= 1;
            }
        } else if q < 31 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q - 1);
        }
    }

    // Step 4: find the shortest decimal in the interval.
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
        vr + u32::from(
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
        vr + u32::from(vr == vm || last_removed_digit >= 5)
    };

    FloatingDecimal32 {
        mantissa: out,
        exponent: e10 + removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(f: f32) -> FloatingDecimal32 {
        let bits = f.to_bits();
        let mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
        let exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);
        f2d(mantissa, exponent)
    }

    fn fd(mantissa: u32, exponent: i32) -> FloatingDecimal32 {
        FloatingDecimal32 {
            mantissa,
            exponent,
        }
    }

    #[test]
    fn exact_powers_and_simple_values() {
        assert_eq!(dec(1.0), fd(1, 0));
        assert_eq!(dec(10.0), fd(1, 1));
        assert_eq!(dec(1_000_000.0), fd(1, 6));
        assert_eq!(dec(0.3), fd(3, -1));
        assert_eq!(dec(0.5), fd(5, -1));
    }

    #[test]
    fn shortens_to_the_decimal_literal() {
        // The nearest binary32 to 123.45 is 123.44999694824219, but five
        // digits already round-trip.
        assert_eq!(dec(123.45), fd(12_345, -2));
        assert_eq!(dec(123456.7), fd(1_234_567, -1));
    }

    #[test]
    fn nine_digit_mantissas() {
        // 13972.1044921875 is exactly representable and needs all 9 digits.
        assert_eq!(dec(f32::from_bits(0x465a506b)), fd(139_721_045, -4));
        assert_eq!(dec(f32::from_bits(0x38e957b9)), fd(111_266_454, -12));
    }

    #[test]
    fn extremes() {
        // Smallest positive subnormal and largest finite binary32.
        assert_eq!(dec(f32::from_bits(1)), fd(1, -45));
        assert_eq!(dec(f32::MAX), fd(34_028_235, 31));
        assert_eq!(dec(f32::MIN_POSITIVE), fd(11_754_944, -45));
    }
}
