//! Calculator configuration.
//!
//! Defaults reproduce the interactive calculator: a 1000-point curve over
//! μ ± 4σ, a z slider on [-3.99, 3.99] in steps of 0.01, probability entry
//! on [0.0001, 0.9999], and the five usual critical levels.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
pub const DEFAULT_RANGE_SIGMAS: f64 = 4.0;
pub const DEFAULT_CRITICAL_PROBABILITIES: [f64; 5] = [0.90, 0.95, 0.975, 0.99, 0.995];

/// Slack, in steps, when deciding whether a bound sits on the grid.
const GRID_EPSILON: f64 = 1e-9;

/// Bounds and step for the interactive z-score slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: -3.99,
            max: 3.99,
            step: 0.01,
        }
    }
}

impl SliderConfig {
    /// Snaps `z` to the nearest multiple of `step` lying in `[min, max]`.
    pub fn snap(&self, z: f64) -> f64 {
        let (lo, hi) = self.grid_bounds();
        let k = (z / self.step).round().clamp(lo, hi);
        (k * self.step).clamp(self.min, self.max)
    }

    /// Smallest and largest step multiples inside `[min, max]`.
    fn grid_bounds(&self) -> (f64, f64) {
        let lo = (self.min / self.step - GRID_EPSILON).ceil();
        let hi = (self.max / self.step + GRID_EPSILON).floor();
        (lo, hi)
    }
}

/// Accepted range for typed-in probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityEntryConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for ProbabilityEntryConfig {
    fn default() -> Self {
        Self {
            min: 0.0001,
            max: 0.9999,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Points sampled along the density curve.
    pub sample_count: usize,
    /// Half-width of the plotted range in standard deviations.
    pub range_sigmas: f64,
    pub z_slider: SliderConfig,
    pub probability_entry: ProbabilityEntryConfig,
    /// Levels listed in the critical-value table, ascending.
    pub critical_probabilities: Vec<f64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            range_sigmas: DEFAULT_RANGE_SIGMAS,
            z_slider: SliderConfig::default(),
            probability_entry: ProbabilityEntryConfig::default(),
            critical_probabilities: DEFAULT_CRITICAL_PROBABILITIES.to_vec(),
        }
    }
}

impl CalculatorConfig {
    /// Reads and validates a JSON config file. Missing keys take defaults.
    ///
    /// # Errors
    /// - [`CalcError::Io`] if the file cannot be read.
    /// - [`CalcError::Parse`] if it is not valid JSON for this schema.
    /// - [`CalcError::InvalidConfig`] if [`validate`](Self::validate) fails.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CalcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| CalcError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(
            "event=config_loaded path={} sample_count={} critical_levels={}",
            path.display(),
            config.sample_count,
            config.critical_probabilities.len()
        );
        Ok(config)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(invalid(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !(self.range_sigmas.is_finite() && self.range_sigmas > 0.0) {
            return Err(invalid(format!(
                "range_sigmas must be positive, got {}",
                self.range_sigmas
            )));
        }
        let slider = &self.z_slider;
        if !(slider.min.is_finite() && slider.max.is_finite() && slider.min < slider.max) {
            return Err(invalid(format!(
                "z_slider requires min < max, got min={}, max={}",
                slider.min, slider.max
            )));
        }
        if !(slider.step.is_finite() && slider.step > 0.0) {
            return Err(invalid(format!(
                "z_slider.step must be positive, got {}",
                slider.step
            )));
        }
        let (lo, hi) = slider.grid_bounds();
        if lo > hi {
            return Err(invalid(format!(
                "z_slider has no step multiple in [{}, {}] for step {}",
                slider.min, slider.max, slider.step
            )));
        }
        let entry = &self.probability_entry;
        if !(entry.min > 0.0 && entry.max < 1.0 && entry.min < entry.max) {
            return Err(invalid(format!(
                "probability_entry requires 0 < min < max < 1, got min={}, max={}",
                entry.min, entry.max
            )));
        }
        if let Some(p) = self
            .critical_probabilities
            .iter()
            .find(|p| !(**p > 0.0 && **p < 1.0))
        {
            return Err(invalid(format!(
                "critical probabilities must lie in (0, 1), got {p}"
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> CalcError {
    CalcError::InvalidConfig(msg)
}
