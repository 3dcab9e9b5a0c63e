/* Naive Discrete Fourier Transform.

The transforms in this module evaluate the definition directly:

```text
    X[k] = Σ_{n=0}^{N-1} x[n] · exp(-2πi·k·n/N)
    x[n] = (1/N) · Σ_{k=0}^{N-1} X[k] · exp(+2πi·k·n/N)
```

and, for a matrix with H rows and W columns,

```text
    X[k1, k2] = Σ_{n1, n2} x[n1, n2] · exp(-2πi·(n1·k1/H + n2·k2/W))
```

The 2D version is deliberately a single O((HW)²) sum rather than a row/column
decomposition, so that it stays independent from the fast path it is checked against.

Each output bin is reduced with `pairwise_sum`, never accumulated left to right.
These routines accept any length and are the fallback for sizes the radix-2 transform rejects.
*/

use itertools::Itertools;
use num_complex::Complex64;
use tracing::instrument;

use crate::{
    errors::Result,
    matrix,
    transform::FourierTransform,
    utils::{Direction, pairwise_sum, twiddle, unit_root},
};

/// The `O(N²)` transform, usable for any length.
#[derive(Default, Clone, Copy, Debug)]
pub struct NaiveDft;

impl FourierTransform for NaiveDft {
    fn forward(&self, values: &[Complex64]) -> Result<Vec<Complex64>> {
        Ok(dft_forward(values))
    }

    fn inverse(&self, values: &[Complex64]) -> Result<Vec<Complex64>> {
        Ok(dft_inverse(values))
    }

    fn forward_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
        dft2d_forward(values, width)
    }

    fn inverse_2d(&self, values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
        dft2d_inverse(values, width)
    }

    /// Any length works, so operands are padded to exactly `min_len`.
    fn padded_len(&self, min_len: usize) -> Result<usize> {
        Ok(min_len)
    }
}

/// Forward transform of a real or complex sequence.
pub fn dft_forward<T: Copy + Into<Complex64>>(values: &[T]) -> Vec<Complex64> {
    dft(&to_complex(values), Direction::Forward)
}

/// Inverse transform, scaled by `1/N`.
pub fn dft_inverse(values: &[Complex64]) -> Vec<Complex64> {
    let n = values.len() as f64;
    let mut result = dft(values, Direction::Inverse);
    result.iter_mut().for_each(|v| *v /= n);
    result
}

/// 2D forward transform of a real or complex matrix with `width` columns.
#[instrument(skip_all, fields(len = values.len(), width = width), level = "debug")]
pub fn dft2d_forward<T: Copy + Into<Complex64>>(values: &[T], width: usize) -> Result<Vec<Complex64>> {
    dft_2d(&to_complex(values), width, Direction::Forward)
}

/// 2D inverse transform, scaled by `1/(H·W)`.
#[instrument(skip_all, fields(len = values.len(), width = width), level = "debug")]
pub fn dft2d_inverse(values: &[Complex64], width: usize) -> Result<Vec<Complex64>> {
    let n = values.len() as f64;
    let mut result = dft_2d(values, width, Direction::Inverse)?;
    result.iter_mut().for_each(|v| *v /= n);
    Ok(result)
}

/// Real component of every sample.
///
/// Used after an inverse transform whose result is real up to rounding.
pub fn real_part(values: &[Complex64]) -> Vec<f64> {
    values.iter().map(|v| v.re).collect()
}

/// Embeds a sequence into the complex plane (real samples get a zero imaginary part).
pub fn to_complex<T: Copy + Into<Complex64>>(values: &[T]) -> Vec<Complex64> {
    values.iter().map(|&v| v.into()).collect()
}

fn dft(values: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = values.len();
    let mut terms = Vec::with_capacity(n);
    (0..n)
        .map(|k| {
            terms.clear();
            terms.extend(
                values
                    .iter()
                    .enumerate()
                    .map(|(j, x)| x * twiddle(j * k, n, direction)),
            );
            pairwise_sum(&terms)
        })
        .collect()
}

fn dft_2d(values: &[Complex64], width: usize, direction: Direction) -> Result<Vec<Complex64>> {
    let height = matrix::height(values.len(), width)?;
    let mut terms = Vec::with_capacity(values.len());
    Ok((0..height)
        .cartesian_product(0..width)
        .map(|(k1, k2)| {
            terms.clear();
            terms.extend((0..height).cartesian_product(0..width).zip(values).map(
                |((n1, n2), x)| {
                    let turns = ((n1 * k1) % height) as f64 / height as f64
                        + ((n2 * k2) % width) as f64 / width as f64;
                    x * unit_root(turns, direction)
                },
            ));
            pairwise_sum(&terms)
        })
        .collect())
}
