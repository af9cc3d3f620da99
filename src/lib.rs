#![no_std]

// Enables the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixed;

pub use common::{FftError, FftProcess, FFT_ORDER, FFT_SIZE};
pub use fixed::{fix_fft, FixFft, ForwardScaling, Q15};
