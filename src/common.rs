// src/common.rs

/// Number of butterfly stages (log2 of the transform length).
pub const FFT_ORDER: u32 = 10;

/// The one transform length supported by the tables.
pub const FFT_SIZE: usize = 1 << FFT_ORDER;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    PartsMismatch,
    PhaseOutOfRange,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size ({})", FFT_SIZE),
            FftError::PartsMismatch => write!(f, "Real and imaginary buffers differ in length"),
            FftError::PhaseOutOfRange => write!(f, "Twiddle phase must be below {}", FFT_SIZE / 2),
        }
    }
}

/// In-place transform over a buffer of `T`.
///
/// The returned value is the scale count: the number of bits every output
/// sample must be shifted left by to restore true amplitude.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<u32, FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
