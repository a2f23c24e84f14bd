//! Rendering module
//!
//! The field draws through the `DrawSurface` trait: Canvas 2D in the browser,
//! a software raster everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod raster;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Rgba;
pub use raster::{Raster, Rgba8};
pub use scene::{draw, draw_system};
pub use surface::DrawSurface;
