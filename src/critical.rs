//! Common critical values.
//!
//! For each confidence level p, the z-score Φ⁻¹(p) and the matching raw
//! value in the current distribution. Rebuilt on every parameter change.

use serde::Serialize;

use crate::config::DEFAULT_CRITICAL_PROBABILITIES;
use crate::distributions::ParameterContext;
use crate::error::Result;
use crate::special;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalValue {
    /// Display label such as `"97.5% (0.975)"`.
    pub label: String,
    pub probability: f64,
    pub z: f64,
    pub x: f64,
}

/// Table for the default levels {0.90, 0.95, 0.975, 0.99, 0.995}.
///
/// # Examples
/// ```
/// use normal_calc::critical::critical_values;
/// use normal_calc::distributions::ParameterContext;
/// let table = critical_values(&ParameterContext::standard());
/// assert_eq!(table.len(), 5);
/// assert!((table[2].z - 1.96).abs() < 1e-3);
/// ```
pub fn critical_values(ctx: &ParameterContext) -> Vec<CriticalValue> {
    DEFAULT_CRITICAL_PROBABILITIES
        .iter()
        .map(|&p| {
            // Every default level lies inside (0, 1).
            let z = special::standard_normal_quantile(p).unwrap_or(f64::NAN);
            row(p, z, ctx)
        })
        .collect()
}

/// Table for arbitrary levels, sorted ascending by probability.
///
/// # Errors
/// Returns [`crate::CalcError::Domain`] if any level is outside `(0, 1)`.
pub fn critical_values_for(
    probabilities: &[f64],
    ctx: &ParameterContext,
) -> Result<Vec<CriticalValue>> {
    let mut levels = probabilities.to_vec();
    levels.sort_by(|a, b| a.total_cmp(b));
    levels
        .into_iter()
        .map(|p| Ok(row(p, special::standard_normal_quantile(p)?, ctx)))
        .collect()
}

fn row(p: f64, z: f64, ctx: &ParameterContext) -> CriticalValue {
    CriticalValue {
        label: level_label(p),
        probability: p,
        z,
        x: ctx.to_x(z),
    }
}

/// `0.975` → `"97.5% (0.975)"`, `0.9` → `"90% (0.90)"`.
pub fn level_label(p: f64) -> String {
    let percent = trim_decimal(format!("{:.4}", p * 100.0));
    let mut fraction = trim_decimal(format!("{p:.6}"));
    // Two decimals minimum, so 0.9 reads "0.90".
    let decimals = fraction.split_once('.').map_or(0, |(_, d)| d.len());
    if decimals == 0 {
        fraction.push_str(".00");
    } else if decimals == 1 {
        fraction.push('0');
    }
    format!("{percent}% ({fraction})")
}

fn trim_decimal(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
