//! Helpers shared by the unit tests: seeded data, tolerant comparisons and direct
//! (definition-level) convolutions used as oracles.

use num_complex::Complex64;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic generator so that failures are reproducible.
pub(crate) fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `size` samples drawn uniformly from `[-100, 100)`.
pub(crate) fn generate(rng: &mut impl Rng, size: usize) -> Vec<f64> {
    (0..size).map(|_| rng.random_range(-100.0..100.0)).collect()
}

/// `size` complex samples with both components drawn from `[-100, 100)`.
pub(crate) fn generate_complex(rng: &mut impl Rng, size: usize) -> Vec<Complex64> {
    (0..size)
        .map(|_| Complex64::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0)))
        .collect()
}

/// Asserts element-wise closeness, relative to the largest expected magnitude.
///
/// Entries near zero inherit the rounding error of their larger neighbours, so a per-element
/// relative check would be meaningless for them.
#[track_caller]
pub(crate) fn assert_close(expected: &[f64], actual: &[f64], tolerance: f64) {
    assert_eq!(expected.len(), actual.len(), "length mismatch");
    let scale = expected.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            (e - a).abs() <= tolerance * scale,
            "elem of index {i}: expected {e}, got {a} (scale {scale})"
        );
    }
}

/// Complex counterpart of [`assert_close`].
#[track_caller]
pub(crate) fn assert_close_complex(expected: &[Complex64], actual: &[Complex64], tolerance: f64) {
    assert_eq!(expected.len(), actual.len(), "length mismatch");
    let scale = expected.iter().fold(1.0_f64, |acc, v| acc.max(v.norm()));
    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            (e - a).norm() <= tolerance * scale,
            "elem of index {i}: expected {e}, got {a} (scale {scale})"
        );
    }
}

/// Direct `O(N·M)` evaluation of `c[n] = Σ_j a[n + j]·b[j]` for `n + j < len(a)`.
pub(crate) fn direct_convolve(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut result = vec![0.0; signal.len()];
    for (i, out) in result.iter_mut().enumerate() {
        for (j, k) in kernel.iter().enumerate() {
            if i + j < signal.len() {
                *out += signal[i + j] * k;
            }
        }
    }
    result
}

/// Direct 2D counterpart of [`direct_convolve`], four nested loops.
pub(crate) fn direct_convolve_2d(
    signal: &[f64],
    width: usize,
    kernel: &[f64],
    kernel_width: usize,
) -> Vec<f64> {
    let height = signal.len() / width;
    let kernel_height = kernel.len() / kernel_width;
    let mut result = vec![0.0; signal.len()];
    for row in 0..height {
        for col in 0..width {
            let mut acc = 0.0;
            for i in 0..kernel_height {
                for j in 0..kernel_width {
                    if row + i < height && col + j < width {
                        acc += signal[(row + i) * width + col + j] * kernel[i * kernel_width + j];
                    }
                }
            }
            result[row * width + col] = acc;
        }
    }
    result
}
