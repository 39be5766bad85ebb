//! The five scalar inputs a UI collects, parsed and validated.
//!
//! The embedding widget layer hands over raw text-field strings; nothing
//! in the pipeline proper ever sees an unvalidated number. Validation
//! failures are typed so the UI can point at the offending field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default values matching the explorer's initial text fields.
pub mod defaults {
    pub const AXIOM: &str = "F";
    pub const RULES: &str = "F:F[+F]F[-F]F";
    pub const ANGLE_DEG: f32 = 25.0;
    pub const ITERATIONS: usize = 4;
    pub const STEP: f32 = 5.0;
}

/// The numeric knobs of one render, immutable for its duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    /// Turn angle in degrees applied by `+` and `-`.
    pub angle_deg: f32,

    /// Forward step length in drawing units applied by `F`.
    pub step: f32,

    /// Number of rewrite generations.
    pub iterations: usize,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            angle_deg: defaults::ANGLE_DEG,
            step: defaults::STEP,
            iterations: defaults::ITERATIONS,
        }
    }
}

/// A text field failed numeric validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("angle `{input}` is not a finite number of degrees")]
    InvalidAngle { input: String },

    #[error("iterations `{input}` is not a non-negative integer")]
    InvalidIterations { input: String },

    #[error("step length `{input}` is not a finite number")]
    InvalidStep { input: String },
}

impl RenderParameters {
    /// Parses the three numeric text fields, trimming whitespace.
    ///
    /// Angle and step must parse as finite floats, iterations as a
    /// non-negative integer. The first failing field is reported;
    /// expansion and rendering must not run on invalid numeric state.
    pub fn parse(angle: &str, iterations: &str, step: &str) -> Result<Self, ParamError> {
        let angle_deg: f32 = angle
            .trim()
            .parse()
            .ok()
            .filter(|a: &f32| a.is_finite())
            .ok_or_else(|| ParamError::InvalidAngle {
                input: angle.to_owned(),
            })?;
        let iterations: usize =
            iterations
                .trim()
                .parse()
                .map_err(|_| ParamError::InvalidIterations {
                    input: iterations.to_owned(),
                })?;
        let step: f32 = step
            .trim()
            .parse()
            .ok()
            .filter(|s: &f32| s.is_finite())
            .ok_or_else(|| ParamError::InvalidStep {
                input: step.to_owned(),
            })?;
        Ok(Self {
            angle_deg,
            step,
            iterations,
        })
    }
}
