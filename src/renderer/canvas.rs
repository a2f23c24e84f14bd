//! Canvas 2D backend (wasm32 only)

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::color::Rgba;
use super::surface::DrawSurface;
use crate::error::SurfaceError;

/// Element id of the background canvas
pub const CANVAS_ID: &str = "particles-js";

/// Inline style pinning the canvas behind the page without stealing input
const BACKGROUND_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];

fn dom_err(e: wasm_bindgen::JsValue) -> SurfaceError {
    SurfaceError::Dom(format!("{:?}", e))
}

/// The browser window and its document
pub fn page() -> Result<(Window, Document), SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;
    Ok((window, document))
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// A canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap an existing canvas
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom_err)?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Create a full-viewport canvas as the first child of `<body>`
    pub fn attach_background(document: &Document) -> Result<Self, SurfaceError> {
        let body = document.body().ok_or(SurfaceError::NoBody)?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(dom_err)?
            .dyn_into()
            .map_err(|_| SurfaceError::Dom("created element is not a canvas".into()))?;
        canvas.set_id(CANVAS_ID);

        let style = canvas.style();
        for (prop, value) in BACKGROUND_STYLE {
            style.set_property(prop, value).map_err(dom_err)?;
        }

        body.insert_before(&canvas, body.first_child().as_ref())
            .map_err(dom_err)?;

        Self::from_canvas(canvas)
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        // arc only fails on a negative radius
        if let Err(e) = self.ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
