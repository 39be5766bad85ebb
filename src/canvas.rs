//! The drawing-surface boundary.
//!
//! The interpreter never talks to a concrete canvas; it emits primitive
//! calls through [`DrawingSurface`]. Backends (a GUI canvas, an SVG
//! writer, a plotter) implement the trait; [`CommandList`] is the
//! crate-provided recording implementation used for inspection, testing,
//! and serialization.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB pen color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A deterministic two-point color gradient.
///
/// Sampled per drawn segment at `t = i / len`, shifting the stroke color
/// across the fractal from trunk to tips. Every sampled channel is clamped
/// to at least `floor`, so strokes never fade to pure black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRamp {
    pub start: Rgb,
    pub end: Rgb,
    pub floor: u8,
}

impl Default for ColorRamp {
    /// The classic foliage ramp: red and blue held low, green decaying
    /// from full brightness to a dim 50 as the drawing progresses.
    fn default() -> Self {
        Self {
            start: Rgb(30, 255, 30),
            end: Rgb(30, 50, 30),
            floor: 30,
        }
    }
}

impl ColorRamp {
    /// Samples the ramp at `t` in `[0, 1]` (clamped).
    pub fn sample(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let mixed = a as f32 + (b as f32 - a as f32) * t;
            (mixed.round() as u8).max(self.floor)
        };
        Rgb(
            channel(self.start.0, self.end.0),
            channel(self.start.1, self.end.1),
            channel(self.start.2, self.end.2),
        )
    }
}

/// The primitive calls a render pass emits, in order.
///
/// Implementations must batch: nothing may repaint before [`flush`]
/// arrives, because a render can emit tens of thousands of primitives and
/// per-primitive repaint is unusably slow. Exactly one `flush` is emitted,
/// at the end of a successful render.
///
/// [`flush`]: DrawingSurface::flush
pub trait DrawingSurface {
    /// Erases any previous drawing. First call of every render pass.
    fn clear(&mut self);

    /// Lifts the pen; subsequent motion must not draw.
    fn pen_up(&mut self);

    /// Lowers the pen; subsequent motion draws.
    fn pen_down(&mut self);

    /// Moves the cursor without drawing, regardless of pen state.
    fn move_to(&mut self, position: Vec2);

    /// Draws a segment from the current cursor position to `position`.
    fn line_to(&mut self, position: Vec2);

    /// Updates the cursor heading (degrees, counter-clockwise from +X).
    fn set_heading(&mut self, heading_deg: f32);

    /// Sets the pen color for subsequent segments.
    fn set_color(&mut self, color: Rgb);

    /// Presents everything drawn since `clear`.
    fn flush(&mut self);
}

/// One recorded primitive call. See [`DrawingSurface`] for semantics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear,
    PenUp,
    PenDown,
    MoveTo(Vec2),
    LineTo(Vec2),
    SetHeading(f32),
    SetColor(Rgb),
    Flush,
}

/// A [`DrawingSurface`] that records the primitive sequence verbatim.
///
/// Two renders of the same inputs produce equal command lists, which is
/// how determinism is checked; the list also serializes, so a recorded
/// drawing can be shipped to an out-of-process backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the endpoints of drawn segments, in draw order.
    pub fn segment_ends(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::LineTo(p) => Some(*p),
            _ => None,
        })
    }
}

impl DrawingSurface for CommandList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn pen_up(&mut self) {
        self.commands.push(DrawCommand::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(DrawCommand::PenDown);
    }

    fn move_to(&mut self, position: Vec2) {
        self.commands.push(DrawCommand::MoveTo(position));
    }

    fn line_to(&mut self, position: Vec2) {
        self.commands.push(DrawCommand::LineTo(position));
    }

    fn set_heading(&mut self, heading_deg: f32) {
        self.commands.push(DrawCommand::SetHeading(heading_deg));
    }

    fn set_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }
}
