// src/fixed/core.rs

use super::math::{halve, saturate};
use super::tables::SINE_LEN;
use super::types::Q15;
use crate::common::{FFT_ORDER, FFT_SIZE};
use num_complex::Complex;

/// How the forward direction protects against overflow.
///
/// The inverse direction always uses the adaptive policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForwardScaling {
    /// Halve every stage: a fixed 1/N scaling that maps a full-scale
    /// sinusoid onto two half-scale bins. The scale count is always 0.
    #[default]
    Fixed,

    /// Halve only the stages whose input leaves the headroom range, like
    /// the inverse direction, and report how many stages were halved.
    /// This is the behaviour of the classic `fix_fft.c` routine, which runs
    /// the range test in both directions; use it for bit-identical output.
    Adaptive,
}

/// Reorders both buffers in place: element `i` trades places with element
/// `bitrev[i]`. Each pair is swapped once, from its lower index.
pub(crate) fn bit_reverse_permute(
    real: &mut [Q15; FFT_SIZE],
    imag: &mut [Q15; FFT_SIZE],
    bitrev: &[u16; FFT_SIZE],
) {
    for (i, &j) in bitrev.iter().enumerate() {
        let j = j as usize;
        if j > i {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }
}

/// Range test over all samples. Bails out at the first component outside
/// the headroom range.
pub(crate) fn needs_shift(real: &[Q15; FFT_SIZE], imag: &[Q15; FFT_SIZE]) -> bool {
    real.iter()
        .zip(imag.iter())
        .any(|(re, im)| !re.has_headroom() || !im.has_headroom())
}

/// Twiddle factor for a table phase in `0..FFT_SIZE / 2`.
///
/// The real part is the cosine (sine read a quarter period ahead). Forward
/// and inverse factors are complex conjugates of each other.
#[inline]
pub(crate) fn twiddle(sine: &[i16; SINE_LEN], phase: usize, inverse: bool) -> Complex<i16> {
    let wr = sine[phase + FFT_SIZE / 4];
    let wi = if inverse { sine[phase] } else { -sine[phase] };
    Complex::new(wr, wi)
}

/// One radix-2 butterfly between `top` and `bottom = top + span`.
///
/// The twiddle product uses four scaled multiplies; sums and differences
/// are formed in `i32` and clipped on the way back to Q15.
#[inline]
fn butterfly(
    real: &mut [Q15; FFT_SIZE],
    imag: &mut [Q15; FFT_SIZE],
    top: usize,
    bottom: usize,
    w: Complex<Q15>,
    shift: bool,
) {
    let (br, bi) = (real[bottom], imag[bottom]);

    // t = w * b
    let tr = i32::from((w.re * br).to_bits()) - i32::from((w.im * bi).to_bits());
    let ti = i32::from((w.re * bi).to_bits()) + i32::from((w.im * br).to_bits());

    let (mut qr, mut qi) = (real[top], imag[top]);
    if shift {
        qr = qr.half();
        qi = qi.half();
    }
    let (qr, qi) = (i32::from(qr.to_bits()), i32::from(qi.to_bits()));

    real[top] = Q15::from_bits(saturate(qr + tr));
    imag[top] = Q15::from_bits(saturate(qi + ti));
    real[bottom] = Q15::from_bits(saturate(qr - tr));
    imag[bottom] = Q15::from_bits(saturate(qi - ti));
}

/// Fixed-point, in-place, radix-2 decimation-in-time FFT of FFT_SIZE points.
///
/// Returns the number of stages whose data was halved by the adaptive
/// range test (always 0 for a forward transform with fixed scaling).
///
/// # Arguments
/// - `real`, `imag`: sample buffers, transformed in place
/// - `inverse`: uses conjugate twiddles and the adaptive scaling policy
/// - `forward_scaling`: scaling policy for the forward direction
/// - `sine`, `bitrev`: the shared lookup tables
pub(crate) fn fix_fft_core(
    real: &mut [Q15; FFT_SIZE],
    imag: &mut [Q15; FFT_SIZE],
    inverse: bool,
    forward_scaling: ForwardScaling,
    sine: &[i16; SINE_LEN],
    bitrev: &[u16; FFT_SIZE],
) -> u32 {
    // 1. Decimation in time: re-order samples
    bit_reverse_permute(real, imag, bitrev);

    let adaptive = inverse || forward_scaling == ForwardScaling::Adaptive;
    let mut scale = 0;
    let mut span = 1;

    // 2. Butterfly stages, span doubling from 1
    for k in (1..=FFT_ORDER).rev() {
        let shift = !adaptive || needs_shift(real, imag);
        if adaptive && shift {
            scale += 1;
            #[cfg(feature = "log")]
            log::trace!("stage {}: input out of headroom, halving (scale {})", FFT_ORDER - k, scale);
        }

        for m in 0..span {
            // 0 <= phase < FFT_SIZE / 2
            let mut w = twiddle(sine, m << (k - 1), inverse);
            if shift {
                w = Complex::new(halve(w.re), halve(w.im));
            }
            let w = Complex::new(Q15::from_bits(w.re), Q15::from_bits(w.im));

            for top in (m..FFT_SIZE).step_by(span << 1) {
                butterfly(real, imag, top, top + span, w, shift);
            }
        }
        span <<= 1;
    }

    #[cfg(feature = "log")]
    log::debug!("fix_fft done: inverse = {}, scale = {}", inverse, scale);

    scale
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
