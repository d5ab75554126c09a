//! Parameter context of a normal distribution N(μ, σ²).
//!
//! The context owns the affine map between raw values and z-scores. It is a
//! plain value: built once per interaction from user input, never mutated.
//!
//! | Coordinate | Map from z | Map to z |
//! |---|---|---|
//! | raw value `x` | `x = z·σ + μ` | `z = (x − μ)/σ` |
//! | probability `p` | `p = Φ(z)` | `z = Φ⁻¹(p)` |

use serde::Serialize;

use crate::error::{CalcError, Result};
use crate::special;

/// Mean and standard deviation of the distribution being explored.
///
/// # Invariants
/// - `mean` is finite.
/// - `std_dev` is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterContext {
    mean: f64,
    std_dev: f64,
}

impl ParameterContext {
    /// Creates a context for N(mean, std_dev²).
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidParameter`] if `std_dev ≤ 0` or either
    /// parameter is not finite.
    ///
    /// # Examples
    /// ```
    /// use normal_calc::distributions::ParameterContext;
    /// let ctx = ParameterContext::new(100.0, 15.0).unwrap();
    /// assert_eq!(ctx.to_z(115.0), 1.0);
    /// assert!(ParameterContext::new(0.0, 0.0).is_err());
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(CalcError::InvalidParameter(format!(
                "normal distribution requires finite μ and σ > 0, got μ={mean}, σ={std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// `true` iff μ = 0 and σ = 1. Only changes how results are labelled.
    pub fn is_standard(&self) -> bool {
        self.mean == 0.0 && self.std_dev == 1.0
    }

    /// z = (x − μ)/σ.
    pub fn to_z(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// x = z·σ + μ.
    pub fn to_x(&self, z: f64) -> f64 {
        z * self.std_dev + self.mean
    }

    /// PDF: φ((x−μ)/σ)/σ.
    pub fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf(self.to_z(x)) / self.std_dev
    }

    /// CDF: Φ((x−μ)/σ).
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf(self.to_z(x))
    }

    /// Inverse CDF in raw-value space: μ + σ·Φ⁻¹(p).
    ///
    /// # Errors
    /// Returns [`CalcError::Domain`] if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        special::standard_normal_quantile(p).map(|z| self.to_x(z))
    }
}

impl Default for ParameterContext {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_context() {
        let ctx = ParameterContext::standard();
        assert!(ctx.is_standard());
        assert_eq!(ctx.mean(), 0.0);
        assert_eq!(ctx.std_dev(), 1.0);
        assert_eq!(ctx, ParameterContext::default());
    }

    #[test]
    fn test_custom_context_not_standard() {
        assert!(!ParameterContext::new(0.0, 2.0).unwrap().is_standard());
        assert!(!ParameterContext::new(1.0, 1.0).unwrap().is_standard());
        assert!(ParameterContext::new(0.0, 1.0).unwrap().is_standard());
    }

    #[test]
    fn test_rejects_non_positive_std_dev() {
        assert!(matches!(
            ParameterContext::new(0.0, 0.0),
            Err(CalcError::InvalidParameter(_))
        ));
        assert!(matches!(
            ParameterContext::new(0.0, -1.0),
            Err(CalcError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ParameterContext::new(f64::NAN, 1.0).is_err());
        assert!(ParameterContext::new(0.0, f64::INFINITY).is_err());
        assert!(ParameterContext::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_affine_maps() {
        let ctx = ParameterContext::new(50.0, 10.0).unwrap();
        assert_eq!(ctx.to_z(50.0), 0.0);
        assert_eq!(ctx.to_z(70.0), 2.0);
        assert_eq!(ctx.to_x(-1.5), 35.0);
    }

    #[test]
    fn test_shifted_cdf_and_pdf() {
        let ctx = ParameterContext::new(10.0, 2.0).unwrap();
        assert!((ctx.cdf(10.0) - 0.5).abs() < 1e-15);
        // Peak density scales by 1/σ.
        let peak = ctx.pdf(10.0);
        assert!((peak - 0.398_942_280_401_432_7 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantile_in_raw_space() {
        let ctx = ParameterContext::new(50.0, 10.0).unwrap();
        let x = ctx.quantile(0.95).unwrap();
        assert!((x - 66.448_536).abs() < 1e-5);
        assert!(matches!(ctx.quantile(0.0), Err(CalcError::Domain(_))));
    }
}
