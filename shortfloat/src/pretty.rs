//! Scientific-notation printing of decimal mantissa/exponent pairs.
//!
//! The exponent written out is the scientific one (`mantissa` scaled to a
//! single leading digit), with an explicit sign and at least two digits,
//! matching the reference formatter byte for byte.

use crate::common::{decimal_len32, decimal_len64};
use crate::d2s::FloatingDecimal64;
use crate::f2s::FloatingDecimal32;

/// Appends `dec` to `buf`, e.g. `-1.23449997e+02`. A zero mantissa prints
/// as `0e+00`.
pub(crate) fn write_decimal32(buf: &mut Vec<u8>, dec: FloatingDecimal32, neg: bool) {
    if neg {
        buf.push(b'-');
    }

    let mut out = dec.mantissa;
    let out_len = decimal_len32(out);

    let mut digits = [0u8; 9];
    for d in digits[..out_len as usize].iter_mut().rev() {
        *d = b'0' + (out % 10) as u8;
        out /= 10;
    }

    buf.push(digits[0]);
    if out_len > 1 {
        buf.push(b'.');
        buf.extend_from_slice(&digits[1..out_len as usize]);
    }

    buf.push(b'e');
    let mut exp = dec.exponent + out_len as i32 - 1;
    if exp < 0 {
        buf.push(b'-');
        exp = -exp;
    } else {
        buf.push(b'+');
    }
    // Binary32 scientific exponents stay within two digits.
    debug_assert!(exp < 100);
    buf.push(b'0' + (exp / 10) as u8);
    buf.push(b'0' + (exp % 10) as u8);
}

/// Appends `dec` to `buf`, e.g. `2.2250738585072014e-308`.
pub(crate) fn write_decimal64(buf: &mut Vec<u8>, dec: FloatingDecimal64, neg: bool) {
    if neg {
        buf.push(b'-');
    }

    let mut out = dec.mantissa;
    let out_len = decimal_len64(out);

    let mut digits = [0u8; 17];
    for d in digits[..out_len as usize].iter_mut().rev() {
        *d = b'0' + (out % 10) as u8;
        out /= 10;
    }

    buf.push(digits[0]);
    if out_len > 1 {
        buf.push(b'.');
        buf.extend_from_slice(&digits[1..out_len as usize]);
    }

    buf.push(b'e');
    let mut exp = dec.exponent + out_len as i32 - 1;
    if exp < 0 {
        buf.push(b'-');
        exp = -exp;
    } else {
        buf.push(b'+');
    }
    if exp >= 100 {
        buf.push(b'0' + (exp / 100) as u8);
        buf.push(b'0' + (exp / 10 % 10) as u8);
        buf.push(b'0' + (exp % 10) as u8);
    } else {
        buf.push(b'0' + (exp / 10) as u8);
        buf.push(b'0' + (exp % 10) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s32(mantissa: u32, exponent: i32, neg: bool) -> String {
        let mut buf = Vec::new();
        write_decimal32(
            &mut buf,
            FloatingDecimal32 {
                mantissa,
                exponent,
            },
            neg,
        );
        String::from_utf8(buf).unwrap()
    }

    fn s64(mantissa: u64, exponent: i32, neg: bool) -> String {
        let mut buf = Vec::new();
        write_decimal64(
            &mut buf,
            FloatingDecimal64 {
                mantissa,
                exponent,
            },
            neg,
        );
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_digit_mantissa_elides_the_point() {
        assert_eq!(s64(0, 0, false), "0e+00");
        assert_eq!(s64(0, 0, true), "-0e+00");
        assert_eq!(s64(1, 0, false), "1e+00");
        assert_eq!(s64(3, -1, false), "3e-01");
        assert_eq!(s64(1, 23, false), "1e+23");
    }

    #[test]
    fn multi_digit_mantissa() {
        assert_eq!(s64(15, -1, false), "1.5e+00");
        assert_eq!(s64(1_234_567, -1, false), "1.234567e+05");
        assert_eq!(s32(123_449_997, -6, true), "-1.23449997e+02");
    }

    #[test]
    fn three_digit_exponents() {
        assert_eq!(s64(5, -324, false), "5e-324");
        assert_eq!(s64(17_976_931_348_623_157, 292, false), "1.7976931348623157e+308");
        assert_eq!(s64(123, 300, false), "1.23e+302");
    }
}
