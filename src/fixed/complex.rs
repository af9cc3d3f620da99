use crate::common::{FftError, FftProcess, FFT_SIZE};
use super::core::{fix_fft_core, twiddle, ForwardScaling};
use super::tables::{BITREV, SINE, SINE_LEN};
use super::types::Q15;
use num_complex::Complex;

/// Fixed-point FFT engine of FFT_SIZE points.
///
/// Holds references to the process-wide sine and bit-reversal tables, so it
/// is cheap to create and can be shared between threads working on
/// different buffers.
#[derive(Debug, Clone, Copy)]
pub struct FixFft {
    sine: &'static [i16; SINE_LEN],
    bitrev: &'static [u16; FFT_SIZE],
    forward_scaling: ForwardScaling,
}

impl Default for FixFft {
    fn default() -> Self {
        Self::new()
    }
}

impl FixFft {
    /// Engine with fixed forward scaling.
    pub fn new() -> Self {
        Self {
            sine: &SINE,
            bitrev: &BITREV,
            forward_scaling: ForwardScaling::Fixed,
        }
    }

    /// Selects the scaling policy of the forward direction.
    pub fn with_forward_scaling(mut self, forward_scaling: ForwardScaling) -> Self {
        self.forward_scaling = forward_scaling;
        self
    }

    pub fn forward_scaling(&self) -> ForwardScaling {
        self.forward_scaling
    }

    /// Unscaled twiddle factor used for table phase `phase`.
    pub fn twiddle(&self, phase: usize, inverse: bool) -> Result<Complex<i16>, FftError> {
        if phase >= FFT_SIZE / 2 {
            return Err(FftError::PhaseOutOfRange);
        }
        Ok(twiddle(self.sine, phase, inverse))
    }

    /// Executes the FFT in-place.
    ///
    /// Forward (`inverse == false`) with fixed scaling yields the spectrum
    /// divided by FFT_SIZE and returns 0. Otherwise the return value is the
    /// number of bits every output sample must be shifted left by to get
    /// the true amplitude (see [`Q15::unscaled`]).
    pub fn process(&self, real: &mut [Q15; FFT_SIZE], imag: &mut [Q15; FFT_SIZE], inverse: bool) -> u32 {
        fix_fft_core(real, imag, inverse, self.forward_scaling, self.sine, self.bitrev)
    }

    /// Same as [`FixFft::process`], for slices whose length is checked at runtime.
    pub fn process_slices(&self, real: &mut [Q15], imag: &mut [Q15], inverse: bool) -> Result<u32, FftError> {
        if real.len() != imag.len() {
            return Err(FftError::PartsMismatch);
        }
        let real: &mut [Q15; FFT_SIZE] = real.try_into().map_err(|_| FftError::SizeMismatch)?;
        let imag: &mut [Q15; FFT_SIZE] = imag.try_into().map_err(|_| FftError::SizeMismatch)?;
        Ok(self.process(real, imag, inverse))
    }
}

// Interleaved buffers are split into stack scratch, transformed and written back.
impl FftProcess<Complex<i16>> for FixFft {
    fn process(&self, buffer: &mut [Complex<i16>], inverse: bool) -> Result<u32, FftError> {
        if buffer.len() != FFT_SIZE {
            return Err(FftError::SizeMismatch);
        }

        let mut real = [Q15::ZERO; FFT_SIZE];
        let mut imag = [Q15::ZERO; FFT_SIZE];
        for (i, c) in buffer.iter().enumerate() {
            real[i] = Q15::from_bits(c.re);
            imag[i] = Q15::from_bits(c.im);
        }

        let scale = self.process(&mut real, &mut imag, inverse);

        for (i, c) in buffer.iter_mut().enumerate() {
            *c = Complex::new(real[i].to_bits(), imag[i].to_bits());
        }
        Ok(scale)
    }
}

/// Transforms `real`/`imag` in place with the default engine and returns
/// the scale count.
pub fn fix_fft(real: &mut [Q15; FFT_SIZE], imag: &mut [Q15; FFT_SIZE], inverse: bool) -> u32 {
    FixFft::new().process(real, imag, inverse)
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
