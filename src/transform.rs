//! The three calculator operations.
//!
//! Raw value, z-score and left-tail probability are three coordinates on
//! the same continuum. Each operation takes one of them plus a
//! [`ParameterContext`] and returns all three.
//!
//! | Operation | Input | Derived |
//! |---|---|---|
//! | [`value_to_probability`] | x | z = (x−μ)/σ, p = Φ(z) |
//! | [`z_to_probability`] | z | x = zσ+μ, p = Φ(z) |
//! | [`probability_to_z`] | p | z = Φ⁻¹(p), x = zσ+μ |

use log::debug;
use serde::Serialize;

use crate::distributions::ParameterContext;
use crate::error::Result;
use crate::special;

/// One point on the continuum, expressed in all three coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transformed {
    /// Raw value in the user's distribution.
    pub x: f64,
    pub z: f64,
    /// Left-tail probability P(X < x).
    pub p: f64,
}

impl Transformed {
    /// Probability on a 0–100 scale.
    pub fn percentile(&self) -> f64 {
        self.p * 100.0
    }
}

/// Raw value → z-score and P(X < x).
///
/// # Examples
/// ```
/// use normal_calc::distributions::ParameterContext;
/// use normal_calc::transform::value_to_probability;
/// let ctx = ParameterContext::new(100.0, 15.0).unwrap();
/// let r = value_to_probability(115.0, &ctx);
/// assert_eq!(r.z, 1.0);
/// assert!((r.p - 0.8413).abs() < 1e-4);
/// ```
pub fn value_to_probability(x: f64, ctx: &ParameterContext) -> Transformed {
    let z = ctx.to_z(x);
    let p = special::standard_normal_cdf(z);
    debug!("op=value_to_probability x={x} z={z} p={p}");
    Transformed { x, z, p }
}

/// z-score → raw value and P(Z < z).
///
/// The probability depends on `z` alone; `ctx` only rescales `x`.
pub fn z_to_probability(z: f64, ctx: &ParameterContext) -> Transformed {
    let x = ctx.to_x(z);
    let p = special::standard_normal_cdf(z);
    debug!("op=z_to_probability z={z} x={x} p={p}");
    Transformed { x, z, p }
}

/// P(X < x) → z-score and raw value.
///
/// # Errors
/// Returns [`crate::CalcError::Domain`] if `p` is outside `(0, 1)`. No
/// z-score is extrapolated for out-of-domain input.
///
/// # Examples
/// ```
/// use normal_calc::distributions::ParameterContext;
/// use normal_calc::transform::probability_to_z;
/// let ctx = ParameterContext::new(50.0, 10.0).unwrap();
/// let r = probability_to_z(0.95, &ctx).unwrap();
/// assert!((r.z - 1.6449).abs() < 1e-4);
/// assert!((r.x - 66.449).abs() < 1e-3);
/// assert!(probability_to_z(1.0, &ctx).is_err());
/// ```
pub fn probability_to_z(p: f64, ctx: &ParameterContext) -> Result<Transformed> {
    let z = special::standard_normal_quantile(p)?;
    let x = ctx.to_x(z);
    debug!("op=probability_to_z p={p} z={z} x={x}");
    Ok(Transformed { x, z, p })
}
