// src/fixed/types/fixed.rs
use super::super::math::{fix_mpy, halve};
use crate::common::FFT_ORDER;
use bytemuck::TransparentWrapper;

/// Signed fractional value in Q(0,15): the full `i16` range maps linearly
/// onto [-1.0, 1.0).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Q15(i16);

// SAFETY: Q15 is repr(transparent) over i16.
unsafe impl TransparentWrapper<i16> for Q15 {}

impl Q15 {
    /// Fractional bits.
    pub const FRAC_BITS: u32 = 15;

    pub const ZERO: Self = Self(0);

    /// -1.0
    pub const MIN: Self = Self(i16::MIN);

    /// Largest value below +1.0.
    pub const MAX: Self = Self(i16::MAX);

    /// Lowest value that can still be doubled by a butterfly sum.
    pub const HEADROOM_MIN: Self = Self(-0x4000);

    /// Highest value that can still be doubled by a butterfly sum.
    pub const HEADROOM_MAX: Self = Self(0x3fff);

    /// Creates a Q15 from the raw integer value.
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Scales the value by 0.5 with a division, truncating toward zero.
    #[inline]
    pub fn half(self) -> Self {
        Self(halve(self.0))
    }

    /// True when the value lies inside [HEADROOM_MIN, HEADROOM_MAX].
    #[inline]
    pub fn has_headroom(self) -> bool {
        self >= Self::HEADROOM_MIN && self <= Self::HEADROOM_MAX
    }

    /// Raw value multiplied by `2^scale` in a wide integer.
    ///
    /// Apply the scale count returned by a transform to recover true
    /// amplitude.
    ///
    /// # Panics
    ///
    /// Panics if `scale > FFT_ORDER`, which no transform can return.
    #[inline]
    pub fn unscaled(self, scale: u32) -> i32 {
        assert!(scale <= FFT_ORDER, "scale count {} exceeds FFT_ORDER", scale);
        i32::from(self.0) * (1i32 << scale)
    }

    /// Views a raw `i16` buffer as Q15 values without copying.
    #[inline]
    pub fn from_bits_slice(bits: &[i16]) -> &[Q15] {
        Self::wrap_slice(bits)
    }

    /// Mutable view of a raw `i16` buffer as Q15 values.
    #[inline]
    pub fn from_bits_slice_mut(bits: &mut [i16]) -> &mut [Q15] {
        Self::wrap_slice_mut(bits)
    }
}

impl From<i16> for Q15 {
    #[inline]
    fn from(bits: i16) -> Self {
        Self(bits)
    }
}

impl From<Q15> for i16 {
    #[inline]
    fn from(value: Q15) -> Self {
        value.0
    }
}

use core::ops::Mul;

impl Mul for Q15 {
    type Output = Q15;

    /// Rounded Q15 product, see [`fix_mpy`].
    #[inline]
    fn mul(self, rhs: Q15) -> Self::Output {
        Self(fix_mpy(self.0, rhs.0))
    }
}

use core::ops::MulAssign;

impl MulAssign for Q15 {
    #[inline]
    fn mul_assign(&mut self, rhs: Q15) {
        *self = *self * rhs;
    }
}

use core::fmt;

impl fmt::Debug for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q15({})", self.0)
    }
}

impl fmt::Display for Q15 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/32768", self.0)
    }
}
