//! The drawing surface the field renders onto

use glam::Vec2;

use super::color::Rgba;

/// Minimal 2D raster target: clear plus circle primitives.
///
/// Coordinates are in pixels, origin top-left, y down.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Reset every pixel to transparent
    fn clear(&mut self);

    /// Outline a circle with a 1 px line
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Change the backing size. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);
}
