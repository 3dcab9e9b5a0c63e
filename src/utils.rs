use core::f64::consts::TAU;

use num_complex::Complex64;

use crate::{
    constant::{COMPLEX_ZERO, IMAGINARY_UNIT},
    errors::{FourierError, Result},
};

/// Which way a transform goes.
///
/// The direction only decides the sign of the twiddle exponent; scaling by `1/N` is applied
/// by the inverse routines themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time domain to frequency domain, `exp(-2πi·k/N)`.
    Forward,
    /// Frequency domain back to time domain, `exp(+2πi·k/N)`.
    Inverse,
}

impl Direction {
    /// Sign of the exponent in `exp(±2πi·k/N)`.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

/// Returns the smallest power of two greater than or equal to `size`.
///
/// `0` maps to `1`, matching `usize::next_power_of_two`.
pub fn next_power_of_two(size: usize) -> Result<usize> {
    size.checked_next_power_of_two()
        .ok_or(FourierError::SizeOverflow { size })
}

/// Sums `values` by recursive halving.
///
/// The reduction tree is fixed: split at `len / 2`, sum both halves, add. This keeps rounding
/// identical between runs and bounds the error growth to `O(log N)` instead of `O(N)`.
#[must_use]
pub fn pairwise_sum(values: &[Complex64]) -> Complex64 {
    match values {
        [] => COMPLEX_ZERO,
        [single] => *single,
        _ => {
            let (lo, hi) = values.split_at(values.len() / 2);
            pairwise_sum(lo) + pairwise_sum(hi)
        }
    }
}

/// Point on the unit circle `exp(±2πi·turns)`.
#[inline]
pub(crate) fn unit_root(turns: f64, direction: Direction) -> Complex64 {
    (IMAGINARY_UNIT * (direction.sign() * TAU * turns)).exp()
}

/// Twiddle factor `exp(±2πi·index/len)`.
///
/// The index is reduced modulo `len` first so that large products `k·n` keep a small angle.
#[inline]
pub(crate) fn twiddle(index: usize, len: usize, direction: Direction) -> Complex64 {
    debug_assert!(len > 0);
    unit_root((index % len) as f64 / len as f64, direction)
}
