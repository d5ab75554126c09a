//! Text shown alongside each calculation.
//!
//! The standard normal gets shorter wording (no raw value, `Z` instead of
//! `X`); the numbers themselves are identical either way.

use crate::critical::CriticalValue;
use crate::distributions::ParameterContext;
use crate::transform::Transformed;

/// One-line description of which distribution is in use.
pub fn distribution_banner(ctx: &ParameterContext) -> String {
    if ctx.is_standard() {
        "Using Standard Normal Distribution (μ = 0, σ = 1)".to_string()
    } else {
        format!(
            "Using Custom Normal Distribution (μ = {}, σ = {})",
            ctx.mean(),
            ctx.std_dev()
        )
    }
}

pub fn value_lines(r: &Transformed) -> Vec<String> {
    vec![
        format!("Value (X): {:.4}", r.x),
        format!("Z-score: {:.4}", r.z),
        format!("P(X < {:.4}): {:.4}", r.x, r.p),
        format!("Percentile: {:.2}%", r.percentile()),
    ]
}

pub fn z_lines(r: &Transformed, ctx: &ParameterContext) -> Vec<String> {
    let mut lines = vec![format!("Z-score: {:.2}", r.z)];
    if ctx.is_standard() {
        lines.push(format!(
            "Probability P(Z < {:.2}): {:.4} or {:.2}%",
            r.z,
            r.p,
            r.percentile()
        ));
    } else {
        lines.push(format!("Corresponding value in your distribution: {:.4}", r.x));
        lines.push(format!(
            "Probability P(X < {:.4}): {:.4} or {:.2}%",
            r.x,
            r.p,
            r.percentile()
        ));
    }
    lines.push(format!("Percentile: {:.2}th", r.percentile()));
    lines
}

pub fn probability_lines(r: &Transformed, ctx: &ParameterContext) -> Vec<String> {
    let mut lines = vec![
        format!("For P(X < x) = {:.4} or {:.2}%:", r.p, r.percentile()),
        format!("The z-score is: {:.4}", r.z),
    ];
    if !ctx.is_standard() {
        lines.push(format!("The value in your distribution is: {:.4}", r.x));
    }
    lines
}

pub fn critical_lines(table: &[CriticalValue], ctx: &ParameterContext) -> Vec<String> {
    table
        .iter()
        .map(|row| {
            if ctx.is_standard() {
                format!("{}: z = {:.4}", row.label, row.z)
            } else {
                format!("{}: z = {:.4}, x = {:.4}", row.label, row.z, row.x)
            }
        })
        .collect()
}

/// Background on z-scores, plus conversion formulas for a custom context.
pub fn about_lines(ctx: &ParameterContext) -> Vec<String> {
    let mut lines: Vec<String> = [
        "A z-score represents how many standard deviations a data point is from the mean.",
        "To convert from X ~ N(μ, σ²) to the standard normal Z ~ N(0, 1): Z = (X - μ) / σ",
        "To convert from a z-score back to the original distribution: X = Z × σ + μ",
        "Z = 0 corresponds to the 50th percentile (the mean)",
        "Z = ±1 corresponds to approximately the 16th and 84th percentiles",
        "Z = ±1.96 corresponds to approximately the 2.5th and 97.5th percentiles (95% confidence interval)",
        "Z = ±2.58 corresponds to approximately the 0.5th and 99.5th percentiles (99% confidence interval)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if !ctx.is_standard() {
        let (m, s) = (ctx.mean(), ctx.std_dev());
        lines.push(format!("For your current distribution N({m}, {s}²):"));
        lines.push(format!("Mean (μ) = {m}"));
        lines.push(format!("Standard Deviation (σ) = {s}"));
        lines.push(format!("To convert to a z-score: Z = (X - {m}) / {s}"));
        lines.push(format!("To convert from a z-score: X = Z × {s} + {m}"));
    }
    lines
}
