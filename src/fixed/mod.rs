pub mod types;
mod core;
pub mod complex;
pub mod math;
pub mod tables;

pub use complex::{fix_fft, FixFft};
pub use self::core::ForwardScaling;
pub use types::Q15;
