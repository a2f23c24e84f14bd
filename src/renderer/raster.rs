//! Software raster surface
//!
//! Used by the native headless runner and by tests. Blending is source-over
//! with straight (non-premultiplied) alpha, like a cleared Canvas 2D.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::io::{self, Write};

use super::color::Rgba;
use super::surface::DrawSurface;

/// Stroke line width in pixels (Canvas 2D default)
const LINE_WIDTH: f32 = 1.0;

/// One stored pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Composite `src` over `self`
    fn blend(self, src: Rgba) -> Self {
        let sa = src.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return self;
        }
        let da = self.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(src.r, self.r),
            g: mix(src.g, self.g),
            b: mix(src.b, self.b),
            a: (out_a * 255.0).round() as u8,
        }
    }
}

/// In-memory RGBA image
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Count of pixels with any coverage
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    /// Write a binary PPM, compositing over a black page
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            let scale = p.a as u32;
            rgb.push((p.r as u32 * scale / 255) as u8);
            rgb.push((p.g as u32 * scale / 255) as u8);
            rgb.push((p.b as u32 * scale / 255) as u8);
        }
        out.write_all(&rgb)?;
        out.flush()
    }

    /// Visit every pixel whose center passes `inside`, within a bounding box
    fn shade<F>(&mut self, center: Vec2, extent: f32, color: Rgba, inside: F)
    where
        F: Fn(f32) -> bool,
    {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x0 = (center.x - extent).floor().max(0.0) as u32;
        let y0 = (center.y - extent).floor().max(0.0) as u32;
        let x1 = (center.x + extent).ceil().min(self.width as f32 - 1.0);
        let y1 = (center.y + extent).ceil().min(self.height as f32 - 1.0);
        if x1 < 0.0 || y1 < 0.0 {
            return;
        }
        let (x1, y1) = (x1 as u32, y1 as u32);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                if inside(d) {
                    let idx = (y * self.width + x) as usize;
                    self.pixels[idx] = self.pixels[idx].blend(color);
                }
            }
        }
    }
}

impl DrawSurface for Raster {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgba8::TRANSPARENT);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let half = LINE_WIDTH / 2.0;
        self.shade(center, radius + half + 1.0, color, |d| (d - radius).abs() <= half);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.shade(center, radius + 1.0, color, |d| d <= radius);
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Raster::new(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_circle_covers_center() {
        let mut raster = Raster::new(64, 64);
        raster.fill_circle(Vec2::new(32.0, 32.0), 5.0, Rgba::rgb(255, 0, 0));
        assert_eq!(
            raster.pixel(32, 32),
            Some(Rgba8 { r: 255, g: 0, b: 0, a: 255 })
        );
        assert_eq!(raster.pixel(0, 0), Some(Rgba8::TRANSPARENT));
        // Roughly pi * r^2
        let painted = raster.painted_pixels();
        assert!((60..=100).contains(&painted), "painted = {}", painted);
    }

    #[test]
    fn test_stroke_leaves_center_empty() {
        let mut raster = Raster::new(64, 64);
        raster.stroke_circle(Vec2::new(32.0, 32.0), 20.0, Rgba::rgb(0, 255, 0));
        assert_eq!(raster.pixel(32, 32), Some(Rgba8::TRANSPARENT));
        assert!(raster.painted_pixels() > 0);
    }

    #[test]
    fn test_offscreen_circle_is_clipped() {
        let mut raster = Raster::new(16, 16);
        raster.fill_circle(Vec2::new(-50.0, -50.0), 10.0, Rgba::rgb(255, 255, 255));
        raster.fill_circle(Vec2::new(100.0, 8.0), 10.0, Rgba::rgb(255, 255, 255));
        assert_eq!(raster.painted_pixels(), 0);
    }

    #[test]
    fn test_translucent_blend() {
        let mut raster = Raster::new(4, 4);
        raster.fill_circle(Vec2::new(2.0, 2.0), 3.0, Rgba::new(255, 255, 255, 0.1));
        let p = raster.pixel(1, 1).unwrap();
        assert_eq!(p.a, 26);
        assert_eq!(p.r, 255);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut raster = Raster::new(8, 8);
        raster.fill_circle(Vec2::new(4.0, 4.0), 3.0, Rgba::rgb(1, 2, 3));
        raster.clear();
        assert_eq!(raster.painted_pixels(), 0);

        raster.resize(10, 5);
        assert_eq!(raster.width(), 10.0);
        assert_eq!(raster.height(), 5.0);
        assert_eq!(raster.as_bytes().len(), 10 * 5 * 4);
    }

    #[test]
    fn test_ppm_header() {
        let raster = Raster::new(3, 2);
        let mut out = Vec::new();
        raster.write_ppm(&mut out).unwrap();
        assert!(out.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(out.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
