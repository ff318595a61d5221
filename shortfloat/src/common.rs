//! Integer helpers shared by the two conversion kernels.

/// Returns the number of decimal digits in `u`, counting `0` as one digit.
///
/// Precondition: `u` has at most 9 digits (9 are sufficient for a
/// round-tripping binary32 mantissa).
pub(crate) fn decimal_len32(u: u32) -> u32 {
    debug_assert!(u < 1_000_000_000);
    if u >= 100_000_000 {
        9
    } else if u >= 10_000_000 {
        8
    } else if u >= 1_000_000 {
        7
    } else if u >= 100_000 {
        6
    } else if u >= 10_000 {
        5
    } else if u >= 1_000 {
        4
    } else if u >= 100 {
        3
    } else if u >= 10 {
        2
    } else {
        1
    }
}

/// Returns the number of decimal digits in `u`, counting `0` as one digit.
///
/// Precondition: `u` has at most 17 digits (17 are sufficient for a
/// round-tripping binary64 mantissa).
pub(crate) fn decimal_len64(u: u64) -> u32 {
    debug_assert!(u < 100_000_000_000_000_000);
    if u >= 10_000_000_000_000_000 {
        17
    } else if u >= 1_000_000_000_000_000 {
        16
    } else if u >= 100_000_000_000_000 {
        15
    } else if u >= 10_000_000_000_000 {
        14
    } else if u >= 1_000_000_000_000 {
        13
    } else if u >= 100_000_000_000 {
        12
    } else if u >= 10_000_000_000 {
        11
    } else if u >= 1_000_000_000 {
        10
    } else if u >= 100_000_000 {
        9
    } else if u >= 10_000_000 {
        8
    } else if u >= 1_000_000 {
        7
    } else if u >= 100_000 {
        6
    } else if u >= 10_000 {
        5
    } else if u >= 1_000 {
        4
    } else if u >= 100 {
        3
    } else if u >= 10 {
        2
    } else {
        1
    }
}

/// Returns `floor(log10(2^e))`.
///
/// The approximation is exact for `0 <= e <= 1650`; 2^1651 is the first
/// input it gets wrong.
pub(crate) fn log10_pow2(e: i32) -> u32 {
    debug_assert!((0..=1650).contains(&e));
    (e as u32 * 78913) >> 18
}

/// Returns `floor(log10(5^e))`.
///
/// The approximation is exact for `0 <= e <= 2620`.
pub(crate) fn log10_pow5(e: i32) -> u32 {
    debug_assert!((0..=2620).contains(&e));
    (e as u32 * 732923) >> 20
}

/// Returns `ceil(log2(5^e))`, or 1 for `e == 0`.
///
/// The approximation is exact for `0 <= e <= 3528`; above that the
/// multiplication overflows.
pub(crate) fn pow5bits(e: i32) -> i32 {
    debug_assert!((0..=3528).contains(&e));
    (((e as u32 * 1217359) >> 19) + 1) as i32
}
