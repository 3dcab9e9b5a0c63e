//! Radix-2 decimation-in-time Fast Fourier Transform.
//!
//! Inputs are permuted into bit-reversed order, then `log2(N)` butterfly layers combine
//! sub-transforms of size `m/2` into sub-transforms of size `m`:
//!
//! ```text
//!     result[j]       = even[j] + ω_m^j · odd[j]
//!     result[j + m/2] = even[j] - ω_m^j · odd[j]
//! ```
//!
//! with `ω_m = exp(∓2πi/m)`. The inverse divides by the full length `N` once, after the last
//! layer. Lengths must be powers of two; padding is up to the caller.

use num_complex::Complex64;
use p3_util::reverse_slice_index_bits;
use tracing::instrument;

use crate::{
    errors::{FourierError, Result},
    matrix,
    transform::FourierTransform,
    utils::{Direction, next_power_of_two, twiddle},
};

/// The `O(N log N)` transform for power-of-two lengths.
#[derive(Default, Clone, Copy, Debug)]
pub struct Radix2Dft;

impl FourierTransform for Radix2Dft {
    fn forward(&self, values: &[Complex64]) -> Result<Vec<Complex64>> {
        fft_forward(values)
    }

    fn inverse(&self, values: &[Complex64]) -> Result<Vec<Complex64>> {
        fft_inverse(values)
    }

    fn forward_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
        fft2d_forward(values, width)
    }

    fn inverse_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
        fft2d_inverse(values, width)
    }

    /// Operands are padded up to the next power of two.
    fn padded_len(&self, min_len: usize) -> Result<usize> {
        next_power_of_two(min_len)
    }
}

/// Forward transform. Fails unless the length is a power of two.
pub fn fft_forward(values: &[Complex64]) -> Result<Vec<Complex64>> {
    check_len(values.len())?;
    let mut result = values.to_vec();
    transform_in_place(&mut result, Direction::Forward);
    Ok(result)
}

/// Inverse transform, scaled by `1/N`. Fails unless the length is a power of two.
pub fn fft_inverse(values: &[Complex64]) -> Result<Vec<Complex64>> {
    check_len(values.len())?;
    let mut result = values.to_vec();
    transform_in_place(&mut result, Direction::Inverse);
    Ok(result)
}

/// 2D forward transform of a matrix whose width and height are both powers of two.
///
/// Every row is transformed, the matrix is transposed so that columns become rows, those are
/// transformed in turn, and a second transpose restores the original layout.
#[instrument(skip_all, fields(len = values.len(), width = width), level = "debug")]
pub fn fft2d_forward(values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
    fft_2d(values, width, Direction::Forward)
}

/// 2D inverse transform, scaled by `1/(H·W)`.
#[instrument(skip_all, fields(len = values.len(), width = width), level = "debug")]
pub fn fft2d_inverse(values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
    fft_2d(values, width, Direction::Inverse)
}

/// The butterflies silently produce garbage on other lengths, so this is always checked.
const fn check_len(len: usize) -> Result<()> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(FourierError::Precondition { len })
    }
}

fn fft_2d(values: &[Complex64], width: usize, direction: Direction) -> Result<Vec<Complex64>> {
    let height = matrix::height(values.len(), width)?;
    check_len(width)?;
    check_len(height)?;

    let mut rows = values.to_vec();
    rows.chunks_exact_mut(width)
        .for_each(|row| transform_in_place(row, direction));

    let mut columns = matrix::transpose(&rows, width)?;
    columns
        .chunks_exact_mut(height)
        .for_each(|column| transform_in_place(column, direction));

    matrix::transpose(&columns, height)
}

/// Transforms a power-of-two slice in place, scaling by `1/N` in the inverse direction.
fn transform_in_place(values: &mut [Complex64], direction: Direction) {
    debug_assert!(values.len().is_power_of_two());
    let n = values.len();
    if n == 1 {
        return;
    }

    reverse_slice_index_bits(values);

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        // One exp per twiddle, no running product.
        let twiddles: Vec<_> = (0..half).map(|j| twiddle(j, size, direction)).collect();
        for chunk in values.chunks_exact_mut(size) {
            let (evens, odds) = chunk.split_at_mut(half);
            for ((even, odd), w) in evens.iter_mut().zip(odds).zip(&twiddles) {
                let t = *odd * w;
                (*even, *odd) = (*even + t, *even - t);
            }
        }
        size <<= 1;
    }

    if direction == Direction::Inverse {
        let n = n as f64;
        values.iter_mut().for_each(|v| *v /= n);
    }
}
