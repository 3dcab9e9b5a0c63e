//! Linear convolution through frequency-domain multiplication.
//!
//! Multiplying two spectra gives a *circular* result. Both routines here zero-pad the operands
//! far enough that the wrap-around lands outside of the part that is kept, and bring the
//! kernel into the orientation expected by the filter sum:
//!
//! ```text
//!     c[n] = Σ_j a[n + j] · b[j]                      (terms with n + j ≥ len(a) vanish)
//!     c[r][s] = Σ_{i, j} a[r + i][s + j] · b[i][j]
//! ```
//!
//! The kernel is padded to the working size, reverted (reversed on both axes) and rotated by
//! one position on both axes. After this `kernel'[m] = kernel[(-m) mod L]`, so the circular
//! product `Σ_k a[k]·kernel'[(n - k) mod L]` picks exactly `a[n + j]·b[j]`.
//!
//! The working size along each axis is `transform.padded_len(len_a + len_b)`: the exact sum for
//! [`NaiveDft`](crate::dft::NaiveDft), the next power of two for [`Radix2Dft`].

use num_complex::Complex64;
use tracing::{info_span, instrument};

use crate::{
    constant::COMPLEX_ZERO,
    dft::{real_part, to_complex},
    errors::{FourierError, Result},
    fft::Radix2Dft,
    matrix,
    transform::FourierTransform,
};

/// Convolves `signal` with `kernel` using the radix-2 transform.
///
/// The result has the length of `signal`. See [`convolve_with`].
pub fn convolve(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    convolve_with(&Radix2Dft, signal, kernel)
}

/// Convolves `signal` with `kernel` using the given transform backend.
///
/// Computes `c[n] = Σ_j signal[n + j]·kernel[j]` for every `n < len(signal)`, where samples
/// past the end of `signal` count as zero. Both lengths are accepted, including a kernel
/// longer than the signal.
#[instrument(skip_all, fields(signal = signal.len(), kernel = kernel.len()), level = "debug")]
pub fn convolve_with<D: FourierTransform>(
    dft: &D,
    signal: &[f64],
    kernel: &[f64],
) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Ok(Vec::new());
    }
    let min_len = checked_sum(signal.len(), kernel.len())?;
    let len = dft.padded_len(min_len)?;

    let (padded_signal, aligned_kernel) = info_span!("pad", len).in_scope(|| {
        let mut padded_signal = to_complex(signal);
        padded_signal.resize(len, COMPLEX_ZERO);

        let mut padded_kernel = to_complex(kernel);
        padded_kernel.resize(len, COMPLEX_ZERO);
        // A single row of `len` elements.
        let aligned_kernel = matrix::rotate_by_one(&matrix::revert(&padded_kernel, len)?, len)?;
        Ok::<_, FourierError>((padded_signal, aligned_kernel))
    })?;

    let product = info_span!("forward", len).in_scope(|| {
        Ok::<_, FourierError>(multiply(
            &dft.forward(&padded_signal)?,
            &dft.forward(&aligned_kernel)?,
        ))
    })?;

    let mut result = info_span!("inverse", len).in_scope(|| dft.inverse(&product))?;
    result.truncate(signal.len());
    Ok(real_part(&result))
}

/// Convolves a `signal` matrix with a `kernel` matrix using the radix-2 transform.
///
/// See [`convolve2d_with`].
pub fn convolve2d(
    signal: &[f64],
    width: usize,
    kernel: &[f64],
    kernel_width: usize,
) -> Result<Vec<f64>> {
    convolve2d_with(&Radix2Dft, signal, width, kernel, kernel_width)
}

/// 2D convolution of row-major matrices using the given transform backend.
///
/// Computes `c[r][s] = Σ_{i,j} signal[r + i][s + j]·kernel[i][j]`, with samples outside of
/// `signal` counting as zero. The result has the shape of `signal`.
///
/// The kernel must not be larger than the signal along either axis, otherwise
/// [`FourierError::Dimension`] is returned before anything is allocated.
#[instrument(
    skip_all,
    fields(len = signal.len(), width = width, kernel_len = kernel.len(), kernel_width = kernel_width),
    level = "debug"
)]
pub fn convolve2d_with<D: FourierTransform>(
    dft: &D,
    signal: &[f64],
    width: usize,
    kernel: &[f64],
    kernel_width: usize,
) -> Result<Vec<f64>> {
    let height = matrix::height(signal.len(), width)?;
    let kernel_height = matrix::height(kernel.len(), kernel_width)?;
    if kernel_width > width || kernel_height > height {
        return Err(FourierError::Dimension {
            kernel_width,
            kernel_height,
            width,
            height,
        });
    }

    let padded_height = dft.padded_len(checked_sum(height, kernel_height)?)?;
    let padded_width = dft.padded_len(checked_sum(width, kernel_width)?)?;

    let (padded_signal, aligned_kernel) =
        info_span!("pad", height = padded_height, width = padded_width).in_scope(|| {
            let padded_signal = matrix::resize(
                &to_complex(signal),
                width,
                padded_width,
                padded_height,
                COMPLEX_ZERO,
            )?;
            let padded_kernel = matrix::resize(
                &to_complex(kernel),
                kernel_width,
                padded_width,
                padded_height,
                COMPLEX_ZERO,
            )?;
            let aligned_kernel = matrix::rotate_by_one(
                &matrix::revert(&padded_kernel, padded_width)?,
                padded_width,
            )?;
            Ok::<_, FourierError>((padded_signal, aligned_kernel))
        })?;

    let product = info_span!("forward", height = padded_height, width = padded_width).in_scope(
        || {
            Ok::<_, FourierError>(multiply(
                &dft.forward_2d(&padded_signal, padded_width)?,
                &dft.forward_2d(&aligned_kernel, padded_width)?,
            ))
        },
    )?;

    let result = info_span!("inverse", height = padded_height, width = padded_width)
        .in_scope(|| dft.inverse_2d(&product, padded_width))?;

    matrix::resize(&real_part(&result), padded_width, width, height, 0.0)
}

fn checked_sum(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or(FourierError::SizeOverflow { size: a })
}

fn multiply(lhs: &[Complex64], rhs: &[Complex64]) -> Vec<Complex64> {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs).map(|(a, b)| a * b).collect()
}
