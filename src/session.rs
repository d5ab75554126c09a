//! Interaction boundary.
//!
//! A [`Session`] holds the current parameters and the last result shown for
//! each calculation. Every interaction is computed from scratch from the
//! current context plus one input. A rejected input returns its error and
//! leaves every displayed value as it was.

use log::warn;
use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::critical::{critical_values_for, CriticalValue};
use crate::distributions::ParameterContext;
use crate::error::{CalcError, Result};
use crate::transform::{self, Transformed};

/// Single user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    SetParameters { mean: f64, std_dev: f64 },
    Value(f64),
    /// Z-score from the slider; snapped to the slider grid.
    Z(f64),
    /// Typed-in left-tail probability.
    Probability(f64),
}

/// What is currently on display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub context: ParameterContext,
    pub value: Option<Transformed>,
    pub z: Option<Transformed>,
    pub probability: Option<Transformed>,
    pub critical_values: Vec<CriticalValue>,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: CalculatorConfig,
    state: DisplayState,
}

impl Session {
    /// Starts on the standard normal.
    ///
    /// # Errors
    /// Fails if the configured critical levels are outside `(0, 1)`.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        let context = ParameterContext::standard();
        let critical_values = critical_values_for(&config.critical_probabilities, &context)?;
        Ok(Self {
            config,
            state: DisplayState {
                context,
                value: None,
                z: None,
                probability: None,
                critical_values,
            },
        })
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn context(&self) -> &ParameterContext {
        &self.state.context
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies one interaction.
    ///
    /// On success the relevant part of the display is replaced. A parameter
    /// change recomputes every shown result against the new context. On
    /// error nothing changes.
    pub fn apply(&mut self, interaction: Interaction) -> Result<&DisplayState> {
        match self.compute(interaction) {
            Ok(next) => {
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                warn!("event=input_rejected input={interaction:?} error={err}");
                Err(err)
            }
        }
    }

    fn compute(&self, interaction: Interaction) -> Result<DisplayState> {
        let mut next = self.state.clone();
        match interaction {
            Interaction::SetParameters { mean, std_dev } => {
                let ctx = ParameterContext::new(mean, std_dev)?;
                next.critical_values =
                    critical_values_for(&self.config.critical_probabilities, &ctx)?;
                next.value = next.value.map(|r| transform::value_to_probability(r.x, &ctx));
                next.z = next.z.map(|r| transform::z_to_probability(r.z, &ctx));
                next.probability = match next.probability {
                    Some(r) => Some(transform::probability_to_z(r.p, &ctx)?),
                    None => None,
                };
                next.context = ctx;
            }
            Interaction::Value(x) => {
                require_number("value", x)?;
                next.value = Some(transform::value_to_probability(x, &next.context));
            }
            Interaction::Z(z) => {
                require_number("z-score", z)?;
                let z = self.config.z_slider.snap(z);
                next.z = Some(transform::z_to_probability(z, &next.context));
            }
            Interaction::Probability(p) => {
                let entry = &self.config.probability_entry;
                if !(p >= entry.min && p <= entry.max) {
                    return Err(CalcError::Domain(format!(
                        "probability must lie in [{}, {}], got p={p}",
                        entry.min, entry.max
                    )));
                }
                next.probability = Some(transform::probability_to_z(p, &next.context)?);
            }
        }
        Ok(next)
    }
}

fn require_number(name: &str, v: f64) -> Result<()> {
    if v.is_nan() {
        return Err(CalcError::InvalidParameter(format!("{name} must be a number, got NaN")));
    }
    Ok(())
}
