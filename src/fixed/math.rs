// src/fixed/math.rs

/// Fixed-point multiply and scaling, Q(0,15): 1 sign bit, 15 fractional bits.
///
/// The product is formed in `i32`, rounded half up by adding `0x4000` and
/// rescaled by flooring division by `2^15`. `div_euclid` with a positive
/// divisor floors, so this matches an arithmetic right shift bit for bit.
#[inline]
pub fn fix_mpy(a: i16, b: i16) -> i16 {
    let product = i32::from(a) * i32::from(b);
    let rounded = product + (1 << 14);
    rounded.div_euclid(1 << 15) as i16
}

/// Halves by integer division (truncates toward zero).
#[inline]
pub fn halve(x: i16) -> i16 {
    x / 2
}

/// Narrows a wide butterfly sum, clipping instead of wrapping.
#[inline]
pub fn saturate(x: i32) -> i16 {
    x.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
