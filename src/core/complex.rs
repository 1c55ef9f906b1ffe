// src/core/complex.rs

//! Arithmetic on single amplitudes.
//!
//! Thin wrappers over `num_complex::Complex<f64>` that pin down the exact
//! conventions the visualizer relies on, most importantly the range of
//! [`phase_angle`].

use num_complex::Complex;
use std::f64::consts::PI;

/// A single complex amplitude.
pub type Amplitude = Complex<f64>;

/// Component-wise sum `a + b`.
pub fn add(a: Amplitude, b: Amplitude) -> Amplitude {
    a + b
}

/// Complex product `(a.re*b.re - a.im*b.im) + i(a.re*b.im + a.im*b.re)`.
pub fn multiply(a: Amplitude, b: Amplitude) -> Amplitude {
    a * b
}

/// `sqrt(re^2 + im^2)`.
pub fn magnitude(c: Amplitude) -> f64 {
    c.norm()
}

/// `atan2(im, re)` in the half-open range (-PI, PI].
///
/// The zero amplitude yields 0, whatever the signs of its zero components.
/// A sign-flipped real amplitude carries a negative zero imaginary part, for
/// which `atan2` returns exactly `-PI`; that value is folded onto `PI`.
pub fn phase_angle(c: Amplitude) -> f64 {
    if c.re == 0.0 && c.im == 0.0 {
        return 0.0;
    }
    let angle = c.im.atan2(c.re);
    if angle <= -PI { PI } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_add_and_multiply() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(add(a, b), Complex::new(4.0, 1.0));
        // (1 + 2i)(3 - i) = 3 - i + 6i + 2 = 5 + 5i
        assert_eq!(multiply(a, b), Complex::new(5.0, 5.0));
    }

    #[test]
    fn test_magnitude() {
        assert!((magnitude(Complex::new(3.0, 4.0)) - 5.0).abs() < TEST_TOLERANCE);
        assert_eq!(magnitude(Complex::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_phase_angle_conventions() {
        assert_eq!(phase_angle(Complex::new(0.0, 0.0)), 0.0);
        assert!((phase_angle(Complex::new(0.0, 1.0)) - PI / 2.0).abs() < TEST_TOLERANCE);
        assert!((phase_angle(Complex::new(0.0, -1.0)) + PI / 2.0).abs() < TEST_TOLERANCE);
        assert_eq!(phase_angle(Complex::new(-1.0, 0.0)), PI);
        // Negation gives (-0.5, -0.0), where atan2 lands on -PI
        let flipped: Amplitude = -Complex::new(0.5, 0.0);
        assert!(flipped.im.is_sign_negative());
        assert_eq!(phase_angle(flipped), PI);
    }

    #[test]
    fn test_phase_angle_of_signed_zeros() {
        for (re, im) in [(0.0, 0.0), (-0.0, 0.0), (0.0, -0.0), (-0.0, -0.0)] {
            assert_eq!(phase_angle(Complex::new(re, im)), 0.0, "({}, {})", re, im);
        }
        // Oracle flip of an empty basis state: (0 + 0i)(-1 + 0i) = (-0.0, +0.0)
        let flipped_zero = multiply(Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0));
        assert_eq!(phase_angle(flipped_zero), 0.0);
    }
}
