//! Discrete Fourier transforms over `f64` complex samples, and the linear convolutions built
//! on top of them.
//!
//! - [`dft`]: the `O(N²)` definition, for any length and as a reference.
//! - [`fft`]: the radix-2 `O(N log N)` transform, for power-of-two lengths.
//! - [`convolution`]: 1D and 2D convolution, generic over the [`transform::FourierTransform`]
//!   backend.
//! - [`matrix`]: layout helpers for flat row-major matrices.

pub mod constant;
pub mod convolution;
pub mod dft;
pub mod errors;
pub mod fft;
pub mod matrix;
pub mod transform;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use convolution::{convolve, convolve_with, convolve2d, convolve2d_with};
pub use errors::{FourierError, Result};
