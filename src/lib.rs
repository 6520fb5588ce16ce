//! ASCII torus renderer
//!
//! This library implements a software rasterizer that draws a spinning torus
//! as ASCII art: parametric surface sampling, rigid rotation, perspective
//! projection, a per-cell depth buffer, and luminance-to-glyph shading.

pub mod renderer;
pub mod screen;
pub mod stats;
pub mod terminal;
pub mod torus;

pub use renderer::{Frame, RenderConfig, Renderer};
pub use terminal::TerminalDisplay;
pub use torus::Torus;

/// Glyph ramp from dimmest to brightest, indexed by scaled luminance.
pub const LUMINANCE_RAMP: &[u8; 12] = b".,-~:;=!*#$@";

/// Glyph for cells no sample landed on.
pub const BACKGROUND: u8 = b' ';
