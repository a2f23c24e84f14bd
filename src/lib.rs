//! Orbit Field - drifting mini solar systems behind a web page
//!
//! Core modules:
//! - `sim`: Seeded construction and per-frame motion of the orbit systems
//! - `renderer`: Drawing surface abstraction, Canvas 2D and software raster backends
//! - `animator`: Frame driver tying simulation and rendering together
//! - `settings`: Field configuration, persisted in LocalStorage on web
//! - `error`: Host surface acquisition failures

pub mod animator;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use animator::OrbitFieldAnimator;
pub use error::SurfaceError;
pub use settings::FieldSettings;

use glam::Vec2;

/// Field generation constants
pub mod consts {
    use crate::renderer::Rgba;

    /// Number of systems in the default field
    pub const DEFAULT_SYSTEM_COUNT: usize = 10;

    /// Planet radius range [min, max)
    pub const PLANET_RADIUS_MIN: f32 = 8.0;
    pub const PLANET_RADIUS_MAX: f32 = 20.0;

    /// Orbit radius margin added on top of the planet radius [min, max)
    pub const ORBIT_MARGIN_MIN: f32 = 20.0;
    pub const ORBIT_MARGIN_MAX: f32 = 50.0;

    /// Base orbit speed in radians per frame [min, max) - half the page's old 0.01..0.03
    pub const ORBIT_SPEED_MIN: f32 = 0.005;
    pub const ORBIT_SPEED_MAX: f32 = 0.015;

    /// Drift speed = orbit speed * this
    pub const DRIFT_MULTIPLIER: f32 = 50.0;

    /// Satellite draw radius range [min, max)
    pub const SATELLITE_RADIUS_MIN: f32 = 3.0;
    pub const SATELLITE_RADIUS_MAX: f32 = 6.0;

    /// Satellites per system (inclusive)
    pub const SATELLITES_MIN: usize = 2;
    pub const SATELLITES_MAX: usize = 4;

    /// Per-satellite speed jitter relative to the system orbit speed [min, max)
    pub const SATELLITE_SPEED_JITTER_MIN: f32 = 0.8;
    pub const SATELLITE_SPEED_JITTER_MAX: f32 = 1.2;

    /// Chance that a system gets one highlighted satellite
    pub const HIGHLIGHT_PROBABILITY: f64 = 0.1;

    /// Palette
    pub const PLANET_COLOR: Rgba = Rgba::rgb(0xf3, 0x9c, 0x12);
    pub const HIGHLIGHT_COLOR: Rgba = Rgba::rgb(0x27, 0xae, 0x60);
    pub const NEUTRAL_COLOR: Rgba = Rgba::rgb(0xbd, 0xc3, 0xc7);
    pub const ORBIT_GUIDE_COLOR: Rgba = Rgba::new(255, 255, 255, 0.1);
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
