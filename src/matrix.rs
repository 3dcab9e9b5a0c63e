//! Layout helpers for matrices stored as flat row-major buffers with an explicit width.
//!
//! None of these functions know anything about Fourier transforms: they only move elements
//! around. Each returns a freshly allocated buffer and leaves its input untouched.

use p3_matrix::dense::RowMajorMatrix;

use crate::errors::{FourierError, Result};

/// Number of rows of a `len`-element buffer laid out with rows of `width` elements.
///
/// Fails with [`FourierError::Shape`] if `width` is zero or does not divide `len`.
pub const fn height(len: usize, width: usize) -> Result<usize> {
    if width == 0 || len % width != 0 {
        return Err(FourierError::Shape { len, width });
    }
    Ok(len / width)
}

/// Swaps rows and columns.
///
/// The result is laid out with a width equal to the original height.
pub fn transpose<T>(values: &[T], width: usize) -> Result<Vec<T>>
where
    T: Copy + Default + Send + Sync,
{
    height(values.len(), width)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }
    Ok(RowMajorMatrix::new(values.to_vec(), width).transpose().values)
}

/// Copies `values` into a `new_height × new_width` buffer.
///
/// The overlapping top-left rectangle is copied as is; cells outside of the source are set
/// to `fill`. Shrinking along an axis crops, growing pads.
pub fn resize<T: Copy>(
    values: &[T],
    old_width: usize,
    new_width: usize,
    new_height: usize,
    fill: T,
) -> Result<Vec<T>> {
    let old_height = height(values.len(), old_width)?;
    let len = new_width
        .checked_mul(new_height)
        .ok_or(FourierError::SizeOverflow { size: new_width })?;

    let mut resized = vec![fill; len];
    let cols = old_width.min(new_width);
    for (dst, src) in resized
        .chunks_exact_mut(new_width.max(1))
        .zip(values.chunks_exact(old_width))
        .take(old_height.min(new_height))
    {
        dst[..cols].copy_from_slice(&src[..cols]);
    }
    Ok(resized)
}

/// Cyclically shifts the matrix by one row down and one column right.
///
/// The element at `(r, c)` moves to `((r + 1) mod h, (c + 1) mod w)`. On a single row this is
/// a right rotation by one.
pub fn rotate_by_one<T: Copy>(values: &[T], width: usize) -> Result<Vec<T>> {
    height(values.len(), width)?;
    let mut rotated = values.to_vec();
    if rotated.is_empty() {
        return Ok(rotated);
    }
    // Moving the last row to the top shifts rows; then each row is rotated on its own.
    rotated.rotate_right(width);
    for row in rotated.chunks_exact_mut(width) {
        row.rotate_right(1);
    }
    Ok(rotated)
}

/// Reverses both the row order and the column order (a 180° rotation).
///
/// In a row-major buffer this is the same as reversing the whole buffer.
pub fn revert<T: Copy>(values: &[T], width: usize) -> Result<Vec<T>> {
    height(values.len(), width)?;
    Ok(values.iter().rev().copied().collect())
}
