//! Density-curve data for the plotting collaborator.
//!
//! A single sampler, [`density_curve`], produces the curve, the shaded
//! left tail and the cutoff marker. The three builders below only differ in
//! the labels they attach. Nothing here renders.

use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::distributions::ParameterContext;
use crate::transform::Transformed;

/// Headroom above the curve's peak.
const Y_HEADROOM: f64 = 1.1;

/// Text attached to a plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Boxed text in the corner, e.g. `P(Z < 1.96) = 0.9750`.
    pub annotation: Option<String>,
}

/// Everything needed to draw a filled density curve with a cutoff line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityPlot {
    pub xs: Vec<f64>,
    pub density: Vec<f64>,
    /// Left-tail fill from the range minimum to `cut_point`.
    pub shaded_xs: Vec<f64>,
    pub shaded_density: Vec<f64>,
    /// Cutoff in raw-value space; equals z for the standard normal.
    pub cut_point: f64,
    pub probability: f64,
    pub y_max: f64,
    #[serde(flatten)]
    pub labels: PlotLabels,
}

/// `n` evenly spaced points on `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Samples N(μ, σ²) over μ ± k·σ and shades the area left of `cut_point`.
///
/// The shaded region is empty when `cut_point` does not exceed the range
/// minimum.
pub fn density_curve(
    ctx: &ParameterContext,
    cut_point: f64,
    probability: f64,
    labels: PlotLabels,
    config: &CalculatorConfig,
) -> DensityPlot {
    let half_width = config.range_sigmas * ctx.std_dev();
    let lo = ctx.mean() - half_width;
    let hi = ctx.mean() + half_width;

    let xs = linspace(lo, hi, config.sample_count);
    let density: Vec<f64> = xs.iter().map(|&x| ctx.pdf(x)).collect();

    let shaded_xs = if cut_point > lo {
        linspace(lo, cut_point, config.sample_count)
    } else {
        Vec::new()
    };
    let shaded_density = shaded_xs.iter().map(|&x| ctx.pdf(x)).collect();

    let peak = density.iter().copied().fold(0.0_f64, f64::max);

    DensityPlot {
        xs,
        density,
        shaded_xs,
        shaded_density,
        cut_point,
        probability,
        y_max: peak * Y_HEADROOM,
        labels,
    }
}

/// Plot for the value → probability path.
pub fn value_plot(
    result: &Transformed,
    ctx: &ParameterContext,
    config: &CalculatorConfig,
) -> DensityPlot {
    let labels = PlotLabels {
        title: format!("P(X < {:.2}) = {:.4}", result.x, result.p),
        x_label: "X value".to_string(),
        y_label: "Density".to_string(),
        annotation: None,
    };
    density_curve(ctx, result.x, result.p, labels, config)
}

/// Plot for the z → probability path.
pub fn z_plot(result: &Transformed, ctx: &ParameterContext, config: &CalculatorConfig) -> DensityPlot {
    let annotation = if ctx.is_standard() {
        format!("P(Z < {:.2}) = {:.4}", result.z, result.p)
    } else {
        format!("P(X < {:.2}) = {:.4}", result.x, result.p)
    };
    density_curve(ctx, result.x, result.p, distribution_labels(ctx, annotation), config)
}

/// Plot for the probability → z path.
pub fn probability_plot(
    result: &Transformed,
    ctx: &ParameterContext,
    config: &CalculatorConfig,
) -> DensityPlot {
    let annotation = if ctx.is_standard() {
        format!("P(Z < {:.4}) = {:.4}", result.z, result.p)
    } else {
        format!("P(X < {:.4}) = {:.4}", result.x, result.p)
    };
    density_curve(ctx, result.x, result.p, distribution_labels(ctx, annotation), config)
}

fn distribution_labels(ctx: &ParameterContext, annotation: String) -> PlotLabels {
    let (title, x_label) = if ctx.is_standard() {
        ("Standard Normal Distribution".to_string(), "Z-score")
    } else {
        (
            format!("Normal Distribution (μ={}, σ={})", ctx.mean(), ctx.std_dev()),
            "X value",
        )
    };
    PlotLabels {
        title,
        x_label: x_label.to_string(),
        y_label: "Probability Density".to_string(),
        annotation: Some(annotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{probability_to_z, value_to_probability, z_to_probability};

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        let v = linspace(-4.0, 4.0, 5);
        assert_eq!(v, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_standard_curve_shape() {
        let config = CalculatorConfig::default();
        let ctx = ParameterContext::standard();
        let r = z_to_probability(1.0, &ctx);
        let plot = z_plot(&r, &ctx, &config);

        assert_eq!(plot.xs.len(), 1000);
        assert_eq!(plot.density.len(), 1000);
        assert_eq!(plot.xs[0], -4.0);
        assert_eq!(plot.xs[999], 4.0);
        assert_eq!(plot.shaded_xs.len(), 1000);
        assert_eq!(*plot.shaded_xs.last().unwrap(), 1.0);

        let peak = plot.density.iter().copied().fold(0.0_f64, f64::max);
        assert!((plot.y_max - peak * 1.1).abs() < 1e-15);
        assert!(peak < 0.3989423);
    }

    #[test]
    fn test_standard_labels() {
        let config = CalculatorConfig::default();
        let ctx = ParameterContext::standard();
        let plot = z_plot(&z_to_probability(1.96, &ctx), &ctx, &config);
        assert_eq!(plot.labels.title, "Standard Normal Distribution");
        assert_eq!(plot.labels.x_label, "Z-score");
        assert_eq!(plot.labels.y_label, "Probability Density");
        assert_eq!(plot.labels.annotation.as_deref(), Some("P(Z < 1.96) = 0.9750"));
    }

    #[test]
    fn test_custom_labels_and_cut_point() {
        let config = CalculatorConfig::default();
        let ctx = ParameterContext::new(50.0, 10.0).unwrap();
        let r = probability_to_z(0.95, &ctx).unwrap();
        let plot = probability_plot(&r, &ctx, &config);
        assert_eq!(plot.labels.title, "Normal Distribution (μ=50, σ=10)");
        assert_eq!(plot.labels.x_label, "X value");
        assert_eq!(plot.cut_point, r.x);
        assert_eq!(plot.labels.annotation.as_deref(), Some("P(X < 66.4485) = 0.9500"));
        assert_eq!(plot.xs[0], 10.0);
        assert_eq!(plot.xs[999], 90.0);
    }

    #[test]
    fn test_no_shading_left_of_range() {
        let config = CalculatorConfig::default();
        let ctx = ParameterContext::new(100.0, 15.0).unwrap();
        let r = value_to_probability(20.0, &ctx);
        let plot = value_plot(&r, &ctx, &config);
        assert!(plot.shaded_xs.is_empty());
        assert!(plot.shaded_density.is_empty());
        assert_eq!(plot.labels.title, "P(X < 20.00) = 0.0000");
        assert!(plot.labels.annotation.is_none());
    }

    #[test]
    fn test_shading_past_range_ends_at_cut() {
        let config = CalculatorConfig::default();
        let ctx = ParameterContext::standard();
        let r = value_to_probability(6.0, &ctx);
        let plot = value_plot(&r, &ctx, &config);
        assert_eq!(*plot.shaded_xs.last().unwrap(), 6.0);
        assert_eq!(plot.shaded_xs[0], -4.0);
    }

    #[test]
    fn test_sample_count_from_config() {
        let config = CalculatorConfig {
            sample_count: 11,
            range_sigmas: 3.0,
            ..CalculatorConfig::default()
        };
        let ctx = ParameterContext::new(0.0, 2.0).unwrap();
        let plot = density_curve(
            &ctx,
            0.0,
            0.5,
            PlotLabels {
                title: String::new(),
                x_label: String::new(),
                y_label: String::new(),
                annotation: None,
            },
            &config,
        );
        assert_eq!(plot.xs.len(), 11);
        assert_eq!(plot.xs[0], -6.0);
        assert!(plot.xs[5].abs() < 1e-12);
        assert!((plot.density[5] - 0.398_942_280_401_432_7 / 2.0).abs() < 1e-12);
    }
}
