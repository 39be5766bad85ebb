//! Interpreter that walks an expanded instruction string and emits
//! drawing primitives to a [`DrawingSurface`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with an
//! [`InterpreterConfig`], then call [`TurtleInterpreter::render`] with an
//! instruction string and [`RenderParameters`], or
//! [`TurtleInterpreter::generate`] to run expansion and rendering as one
//! pipeline.

use crate::canvas::{ColorRamp, DrawingSurface};
use crate::grammar::{self, ExpandError, RuleTable};
use crate::params::RenderParameters;
use crate::turtle::{Pose, TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for turtle interpretation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Where the turtle homes to at the start of every render.
    pub home: Vec2,

    /// Reference heading at the start of every render, in degrees.
    /// Default: 90 (up the screen).
    pub home_heading_deg: f32,

    /// Maximum pose-stack depth for `[`/`]` branching.
    pub max_stack_depth: usize,

    /// Gradient sampled per drawn segment.
    pub ramp: ColorRamp,

    /// Optional cap on expanded-string length, enforced by
    /// [`TurtleInterpreter::generate`] as a safety valve against
    /// runaway iteration counts. `None` means unbounded.
    pub max_instructions: Option<usize>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            home: Vec2::ZERO,
            home_heading_deg: 90.0,
            max_stack_depth: 1024,
            ramp: ColorRamp::default(),
            max_instructions: None,
        }
    }
}

/// A structural fault in the instruction string, detected mid-render.
///
/// The render aborts cleanly; whatever was already emitted stays on the
/// surface, and the next render begins with a `clear` anyway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A `]` arrived with no unpopped `[` before it. Only malformed rules
    /// can produce this.
    #[error("`]` at instruction {index} has no matching `[`")]
    StackUnderflow { index: usize },

    /// A `[` would have pushed past the configured stack depth. Dropping
    /// the push instead would silently mispair a later `]`.
    #[error("`[` at instruction {index} exceeds the stack depth limit of {limit}")]
    StackDepthExceeded { index: usize, limit: usize },
}

/// Failure of the combined expand-then-render pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Interprets instruction strings as 2D turtle drawings.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: InterpreterConfig,
}

impl TurtleInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Renders `instructions` onto `surface`.
    ///
    /// Every render starts from a clean slate: `clear`, pen up, home, set
    /// the reference heading, pen down. The string is then walked strictly
    /// left to right, each symbol dispatched per [`TurtleOp::from_symbol`]:
    ///
    /// - `F` sets the ramp color for position `i / len` and draws one
    ///   `step`-length segment along the heading;
    /// - `+` / `-` rotate the heading clockwise / counter-clockwise by
    ///   `angle_deg` without moving;
    /// - `[` / `]` save and restore the pose, the restore travelling with
    ///   the pen up;
    /// - anything else is inert.
    ///
    /// Exactly one `flush` is emitted on success, so a batching surface
    /// repaints once. Rendering the same inputs twice emits an identical
    /// primitive sequence.
    pub fn render<S>(
        &self,
        instructions: &str,
        params: &RenderParameters,
        surface: &mut S,
    ) -> Result<(), RenderError>
    where
        S: DrawingSurface + ?Sized,
    {
        let total = instructions.chars().count();

        surface.clear();
        let mut turtle = TurtleState {
            pose: Pose {
                position: self.config.home,
                heading_deg: self.config.home_heading_deg,
            },
            pen_down: false,
        };
        surface.pen_up();
        surface.move_to(turtle.pose.position);
        surface.set_heading(turtle.pose.heading_deg);
        surface.pen_down();
        turtle.pen_down = true;

        let mut stack: Vec<Pose> = Vec::new();

        for (index, symbol) in instructions.chars().enumerate() {
            match TurtleOp::from_symbol(symbol) {
                TurtleOp::Draw => {
                    let t = index as f32 / total as f32;
                    surface.set_color(self.config.ramp.sample(t));
                    turtle.advance(params.step);
                    surface.line_to(turtle.pose.position);
                }
                TurtleOp::TurnCw => turtle.turn_cw(params.angle_deg),
                TurtleOp::TurnCcw => turtle.turn_ccw(params.angle_deg),
                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        return Err(RenderError::StackDepthExceeded {
                            index,
                            limit: self.config.max_stack_depth,
                        });
                    }
                    stack.push(turtle.pose);
                }
                TurtleOp::Pop => {
                    let pose = stack
                        .pop()
                        .ok_or(RenderError::StackUnderflow { index })?;
                    surface.pen_up();
                    turtle.pose = pose;
                    surface.move_to(pose.position);
                    surface.set_heading(pose.heading_deg);
                    surface.pen_down();
                }
                TurtleOp::Ignore => {}
            }
        }

        surface.flush();
        Ok(())
    }

    /// Runs the full pipeline: expand `axiom` under `rules` for
    /// `params.iterations` generations, then render the result.
    ///
    /// Honors [`InterpreterConfig::max_instructions`] during expansion.
    /// Returns the expanded instruction string so callers can display or
    /// inspect it.
    pub fn generate<S>(
        &self,
        axiom: &str,
        rules: &RuleTable,
        params: &RenderParameters,
        surface: &mut S,
    ) -> Result<String, GenerateError>
    where
        S: DrawingSurface + ?Sized,
    {
        let instructions = match self.config.max_instructions {
            Some(limit) => grammar::expand_bounded(axiom, rules, params.iterations, limit)?,
            None => grammar::expand(axiom, rules, params.iterations),
        };
        self.render(&instructions, params, surface)?;
        Ok(instructions)
    }
}
