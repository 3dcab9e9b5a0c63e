use num_complex::Complex64;

/// The imaginary unit `i`.
///
/// Twiddle factors are built as `exp(±i·θ)`, so every transform routine shares this value.
pub const IMAGINARY_UNIT: Complex64 = Complex64::new(0.0, 1.0);

/// The additive identity of the complex plane, used as the zero-fill when padding.
pub const COMPLEX_ZERO: Complex64 = Complex64::new(0.0, 0.0);
