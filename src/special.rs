//! Standard normal functions.
//!
//! Thin wrappers over the `statrs` standard normal N(0, 1). Every other
//! module evaluates Φ, Φ⁻¹ and φ through these three functions, so the
//! domain checks live in exactly one place.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::{CalcError, Result};

fn standard() -> Normal {
    Normal::standard()
}

/// Standard normal CDF Φ(z) = P(Z ≤ z) for Z ~ N(0,1).
///
/// Saturates to `0.0` / `1.0` for large |z| instead of failing.
///
/// # Returns
/// - `f64::NAN` if `z` is NaN.
/// - `0.0` at `-∞`, `1.0` at `+∞`.
///
/// # Examples
/// ```
/// use normal_calc::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((standard_normal_cdf(1.96) - 0.9750).abs() < 1e-4);
/// ```
pub fn standard_normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z == f64::INFINITY {
        return 1.0;
    }
    if z == f64::NEG_INFINITY {
        return 0.0;
    }
    standard().cdf(z)
}

/// Standard normal quantile Φ⁻¹(p).
///
/// Given `p ∈ (0, 1)`, returns `z` such that `Φ(z) = p`. Probabilities
/// very close to 0 or 1 yield large-magnitude but finite `z`.
///
/// # Errors
/// Returns [`CalcError::Domain`] if `p ≤ 0`, `p ≥ 1` or `p` is NaN.
///
/// # Examples
/// ```
/// use normal_calc::special::standard_normal_quantile;
/// assert!(standard_normal_quantile(0.5).unwrap().abs() < 1e-12);
/// assert!((standard_normal_quantile(0.975).unwrap() - 1.959964).abs() < 1e-6);
/// assert!(standard_normal_quantile(1.0).is_err());
/// ```
pub fn standard_normal_quantile(p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return Err(CalcError::Domain(format!(
            "probability must lie strictly between 0 and 1, got p={p}"
        )));
    }
    Ok(standard().inverse_cdf(p))
}

/// Standard normal PDF φ(z) = (1/√(2π)) exp(−z²/2).
///
/// # Examples
/// ```
/// use normal_calc::special::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    standard().pdf(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_fixed_points() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_known_values() {
        // Φ(1) ≈ 0.841345, Φ(-1) ≈ 0.158655
        assert!((standard_normal_cdf(1.0) - 0.841_344_746).abs() < 1e-8);
        assert!((standard_normal_cdf(-1.0) - 0.158_655_254).abs() < 1e-8);
        assert!((standard_normal_cdf(2.58) - 0.995_059_6).abs() < 1e-6);
    }

    #[test]
    fn test_cdf_saturates() {
        assert_eq!(standard_normal_cdf(-40.0), 0.0);
        assert_eq!(standard_normal_cdf(40.0), 1.0);
    }

    #[test]
    fn test_quantile_known_values() {
        assert!((standard_normal_quantile(0.95).unwrap() - 1.644_853_627).abs() < 1e-8);
        assert!((standard_normal_quantile(0.025).unwrap() + 1.959_963_985).abs() < 1e-8);
        assert!((standard_normal_quantile(0.995).unwrap() - 2.575_829_304).abs() < 1e-8);
    }

    #[test]
    fn test_quantile_rejects_boundaries() {
        assert!(matches!(standard_normal_quantile(0.0), Err(CalcError::Domain(_))));
        assert!(matches!(standard_normal_quantile(1.0), Err(CalcError::Domain(_))));
        assert!(matches!(standard_normal_quantile(-0.1), Err(CalcError::Domain(_))));
        assert!(matches!(standard_normal_quantile(1.5), Err(CalcError::Domain(_))));
        assert!(matches!(standard_normal_quantile(f64::NAN), Err(CalcError::Domain(_))));
    }

    #[test]
    fn test_quantile_near_boundary_is_large_but_finite() {
        let z = standard_normal_quantile(1e-15).unwrap();
        assert!(z.is_finite());
        assert!(z < -7.5);
    }

    #[test]
    fn test_pdf_symmetric() {
        assert!((standard_normal_pdf(1.3) - standard_normal_pdf(-1.3)).abs() < 1e-15);
        assert!(standard_normal_pdf(f64::NAN).is_nan());
    }
}
