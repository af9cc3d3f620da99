mod fixed;

pub use fixed::Q15;
