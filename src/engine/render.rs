// Render boundary
//
// The simulation owns no pixels. Whatever presents the game implements
// `RenderSink`; the world walks its body list once per frame and hands each
// body over as a filled rect.

use crate::engine::physics::Body;

/// Solid RGB color for a body's debug rect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default palette
pub const BACKGROUND: Color = Color::rgb(150, 150, 150);
pub const BODY_DEFAULT: Color = Color::rgb(200, 0, 50);
pub const BLOCK: Color = Color::rgb(20, 20, 20);
pub const CRATE: Color = Color::rgb(120, 80, 30);

/// Drawing capability the world renders through.
///
/// Called once per frame: `clear`, then `draw` for every body in insertion
/// order. Implementations may rasterize, batch, or ignore the calls entirely.
pub trait RenderSink {
    /// Fill the whole surface with a background color
    fn clear(&mut self, color: Color);

    /// Paint one body as a filled rectangle of its color
    fn draw(&mut self, body: &Body);
}

/// Sink that discards everything — headless runs and tests
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self, _color: Color) {}

    fn draw(&mut self, _body: &Body) {}
}
