//! Shortest round-trip conversion of IEEE-754 floats to decimal, using the
//! Ryū algorithm (Adams, PLDI 2018).
//!
//! The conversion kernels produce a decimal mantissa/exponent pair
//! ([`FloatingDecimal32`], [`FloatingDecimal64`]) that parses back to
//! exactly the input with the fewest possible significant digits. The
//! formatting entry points render that pair in scientific notation with an
//! explicit exponent sign and at least two exponent digits:
//!
//! ```
//! assert_eq!(shortfloat::format64(123456.7), "1.234567e+05");
//! assert_eq!(shortfloat::format32(f32::MIN_POSITIVE), "1.1754944e-38");
//! assert_eq!(shortfloat::format64(0.3), "3e-01");
//! ```
//!
//! Non-finite values format as `NaN`, `+Inf` and `-Inf`; zero keeps its
//! sign (`-0e+00`). Callers that do their own digit placement can use
//! [`f2d`]/[`d2d`] and consume the raw pair instead.

mod common;
mod d2s;
mod d2s_full_table;
mod d2s_intrinsics;
mod f2s;
mod f2s_full_table;
mod f2s_intrinsics;
mod pretty;

pub use crate::d2s::FloatingDecimal64;
pub use crate::f2s::FloatingDecimal32;

use crate::d2s::{DOUBLE_EXPONENT_BITS, DOUBLE_MANTISSA_BITS};
use crate::f2s::{FLOAT_EXPONENT_BITS, FLOAT_MANTISSA_BITS};

// Worst-case output lengths: sign, 9 or 17 digits, point, `e`, exponent
// sign, and 2 or 3 exponent digits.
const MAX_LEN32: usize = 15;
const MAX_LEN64: usize = 24;

/// Converts `val` to its shortest round-tripping decimal pair.
///
/// `±0` maps to `{mantissa: 0, exponent: 0}`. The result is unspecified
/// for non-finite inputs; check [`f32::is_finite`] first when in doubt.
pub fn f2d(val: f32) -> FloatingDecimal32 {
    let bits = val.to_bits();
    let ieee_mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);
    if ieee_mantissa == 0 && ieee_exponent == 0 {
        FloatingDecimal32 {
            mantissa: 0,
            exponent: 0,
        }
    } else {
        f2s::f2d(ieee_mantissa, ieee_exponent)
    }
}

/// Converts `val` to its shortest round-tripping decimal pair.
///
/// `±0` maps to `{mantissa: 0, exponent: 0}`. The result is unspecified
/// for non-finite inputs; check [`f64::is_finite`] first when in doubt.
pub fn d2d(val: f64) -> FloatingDecimal64 {
    let bits = val.to_bits();
    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent =
        (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);
    if ieee_mantissa == 0 && ieee_exponent == 0 {
        FloatingDecimal64 {
            mantissa: 0,
            exponent: 0,
        }
    } else {
        d2s::d2d(ieee_mantissa, ieee_exponent)
    }
}

/// Formats `val` in shortest round-tripping scientific notation.
pub fn format32(val: f32) -> String {
    let mut buf = Vec::with_capacity(MAX_LEN32);
    append32(&mut buf, val);
    // The formatter only emits ASCII.
    String::from_utf8(buf).unwrap()
}

/// Formats `val` in shortest round-tripping scientific notation.
pub fn format64(val: f64) -> String {
    let mut buf = Vec::with_capacity(MAX_LEN64);
    append64(&mut buf, val);
    // The formatter only emits ASCII.
    String::from_utf8(buf).unwrap()
}

/// Appends the shortest round-tripping scientific form of `val` to `buf`.
pub fn append32(buf: &mut Vec<u8>, val: f32) {
    let bits = val.to_bits();
    let neg = bits >> (FLOAT_MANTISSA_BITS + FLOAT_EXPONENT_BITS) != 0;
    let ieee_mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);

    if ieee_exponent == (1u32 << FLOAT_EXPONENT_BITS) - 1 {
        buf.extend_from_slice(special(neg, ieee_mantissa != 0));
        return;
    }
    let dec = if ieee_mantissa == 0 && ieee_exponent == 0 {
        FloatingDecimal32 {
            mantissa: 0,
            exponent: 0,
        }
    } else {
        f2s::f2d(ieee_mantissa, ieee_exponent)
    };
    pretty::write_decimal32(buf, dec, neg);
}

/// Appends the shortest round-tripping scientific form of `val` to `buf`.
pub fn append64(buf: &mut Vec<u8>, val: f64) {
    let bits = val.to_bits();
    let neg = bits >> (DOUBLE_MANTISSA_BITS + DOUBLE_EXPONENT_BITS) != 0;
    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent =
        (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);

    if ieee_exponent == (1u32 << DOUBLE_EXPONENT_BITS) - 1 {
        buf.extend_from_slice(special(neg, ieee_mantissa != 0));
        return;
    }
    let dec = if ieee_mantissa == 0 && ieee_exponent == 0 {
        FloatingDecimal64 {
            mantissa: 0,
            exponent: 0,
        }
    } else {
        d2s::d2d(ieee_mantissa, ieee_exponent)
    };
    pretty::write_decimal64(buf, dec, neg);
}

fn special(neg: bool, nan: bool) -> &'static [u8] {
    if nan {
        b"NaN"
    } else if neg {
        b"-Inf"
    } else {
        b"+Inf"
    }
}
