//! Turtle state and symbol classification for 2D drawing interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A snapshot of the turtle's pose, as saved by `[` and restored by `]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current drawing-surface position of the "cursor".
    pub position: Vec2,

    /// Current heading in degrees, counter-clockwise from the +X axis.
    pub heading_deg: f32,
}

/// The state of the drawing turtle.
///
/// Owned exclusively by one render pass; reset to the configured home
/// pose at the start of every call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    pub pose: Pose,

    /// Whether forward motion draws a segment.
    pub pen_down: bool,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            pose: Pose {
                position: Vec2::ZERO,
                heading_deg: 90.0, // pointing up the screen
            },
            pen_down: false,
        }
    }
}

impl TurtleState {
    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.pose.heading_deg.to_radians())
    }

    /// Advances `step` units along the current heading.
    pub fn advance(&mut self, step: f32) {
        self.pose.position += self.direction() * step;
    }

    /// Rotates clockwise by `angle` degrees (a turtle "right" turn).
    pub fn turn_cw(&mut self, angle: f32) {
        self.pose.heading_deg -= angle;
    }

    /// Rotates counter-clockwise by `angle` degrees (a turtle "left" turn).
    pub fn turn_ccw(&mut self, angle: f32) {
        self.pose.heading_deg += angle;
    }
}

/// Drawing operations an instruction symbol can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Move forward one step with the pen down, drawing a segment (`F`).
    Draw,
    /// Rotate clockwise by the turn angle (`+`).
    TurnCw,
    /// Rotate counter-clockwise by the turn angle (`-`).
    TurnCcw,
    /// Save the current pose onto the stack (`[`).
    Push,
    /// Restore the most recently pushed pose (`]`).
    Pop,
    /// No drawing effect; the symbol exists only to drive rewriting.
    Ignore,
}

impl TurtleOp {
    /// Classifies one instruction symbol.
    ///
    /// Everything outside the drawing alphabet is [`TurtleOp::Ignore`], so
    /// placeholder symbols like `X` pass through rendering inertly.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' => Self::Draw,
            '+' => Self::TurnCw,
            '-' => Self::TurnCcw,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
