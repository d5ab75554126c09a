//! # normal-calc
//!
//! Normal distribution calculator: moves between raw values, z-scores and
//! left-tail probabilities of N(μ, σ²), and produces density-curve data for
//! plotting.
//!
//! ## Modules
//!
//! - [`special`] — Standard normal Φ, Φ⁻¹ and φ
//! - [`distributions`] — Parameter context and the raw ↔ z affine map
//! - [`transform`] — Value→probability, z→probability, probability→z
//! - [`critical`] — Common critical-value table
//! - [`curve`] — Density curve sampling and plot annotation
//! - [`report`] — Display text for each calculation
//! - [`session`] — Interaction boundary that survives rejected input
//! - [`config`] — Calculator settings loaded from JSON
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every result is computed from an explicit
//!   [`ParameterContext`] plus one input; nothing is cached between calls
//! - **Library-backed math**: Φ and Φ⁻¹ come from `statrs`
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod config;
pub mod critical;
pub mod curve;
pub mod distributions;
pub mod error;
pub mod logging;
pub mod report;
pub mod session;
pub mod special;
pub mod transform;

pub use config::CalculatorConfig;
pub use distributions::ParameterContext;
pub use error::{CalcError, Result};
pub use session::{Interaction, Session};
pub use transform::{probability_to_z, value_to_probability, z_to_probability, Transformed};
