use num_complex::Complex64;

use crate::errors::Result;

/// A pair of forward/inverse discrete Fourier transforms over `f64` complex samples.
///
/// Implementors are interchangeable backends for the convolution routines: the naive
/// [`NaiveDft`](crate::dft::NaiveDft) accepts any length, the radix-2
/// [`Radix2Dft`](crate::fft::Radix2Dft) only powers of two. The backend also decides how far
/// convolution operands are padded, through [`FourierTransform::padded_len`].
pub trait FourierTransform {
    /// Transforms a sequence into the frequency domain.
    fn forward(&self, values: &[Complex64]) -> Result<Vec<Complex64>>;

    /// Transforms a frequency-domain sequence back, including the `1/N` scaling.
    fn inverse(&self, values: &[Complex64]) -> Result<Vec<Complex64>>;

    /// 2D forward transform of a row-major matrix with `width` columns.
    fn forward_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>>;

    /// 2D inverse transform of a row-major matrix with `width` columns, scaled by `1/(H·W)`.
    fn inverse_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>>;

    /// Smallest length accepted by this backend that is at least `min_len`.
    fn padded_len(&self, min_len: usize) -> Result<usize>;
}
