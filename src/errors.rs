//! Error types shared by the transforms and the convolution routines.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FourierError>;

/// Everything that can go wrong while transforming or convolving.
///
/// Errors are detected before any output buffer is produced, so a failed call never leaves
/// a partially computed result behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FourierError {
    /// A flat buffer cannot be laid out as a matrix with the stated width.
    #[error("sequence of length {len} cannot be laid out as rows of width {width}")]
    Shape { len: usize, width: usize },

    /// No power of two representable in `usize` is large enough.
    #[error("no representable power of two is greater than or equal to {size}")]
    SizeOverflow { size: usize },

    /// The radix-2 transform was called on a length that is neither 1 nor a power of two.
    #[error("fast transform requires a power-of-two length, got {len}")]
    Precondition { len: usize },

    /// The 2D convolution kernel is larger than the signal along some axis.
    #[error(
        "kernel dimension bigger than input's: kernel is {kernel_height}x{kernel_width}, \
         input is {height}x{width}"
    )]
    Dimension {
        kernel_width: usize,
        kernel_height: usize,
        width: usize,
        height: usize,
    },
}
