//! # lsys-canvas
//!
//! A sovereign interpretation crate for L-System fractal exploration that
//! translates symbol-rewrite grammars into engine-agnostic 2D drawings.
//!
//! It decouples the *grammar* (axiom + production rules, expanded by
//! parallel rewriting) from the *drawing backend* (anything implementing
//! [`DrawingSurface`]), producing an ordered stream of turtle-graphics
//! primitives that can be ingested by a GUI canvas, an SVG writer, or a
//! pen plotter.

pub mod canvas;
pub mod grammar;
pub mod interpreter;
pub mod params;
pub mod turtle;

pub use canvas::*;
pub use grammar::*;
pub use interpreter::*;
pub use params::*;
pub use turtle::*;
