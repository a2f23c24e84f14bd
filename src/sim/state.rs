//! Field state and orbit system types
//!
//! Everything the animation needs between frames lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HIGHLIGHT_COLOR, NEUTRAL_COLOR};
use crate::polar_to_cartesian;
use crate::renderer::Rgba;

/// Which of the two satellite colors a satellite wears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SatelliteTone {
    /// Rare green accent (at most one per system)
    Highlight,
    #[default]
    Neutral,
}

impl SatelliteTone {
    pub fn color(&self) -> Rgba {
        match self {
            SatelliteTone::Highlight => HIGHLIGHT_COLOR,
            SatelliteTone::Neutral => NEUTRAL_COLOR,
        }
    }
}

/// A point revolving around its system's center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    /// Current angle (radians). Grows without bound; never wrapped.
    pub angle: f32,
    /// Radians added to `angle` each frame
    pub angular_speed: f32,
    pub tone: SatelliteTone,
}

impl Satellite {
    /// Position on the orbit ring around `center`
    #[inline]
    pub fn position(&self, center: Vec2, orbit_radius: f32) -> Vec2 {
        center + polar_to_cartesian(orbit_radius, self.angle)
    }
}

/// One drifting mini solar system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSystem {
    pub center: Vec2,
    /// Drift per frame, fixed at creation
    pub velocity: Vec2,
    pub planet_radius: f32,
    pub orbit_radius: f32,
    /// Draw radius shared by every satellite of this system
    pub satellite_radius: f32,
    pub planet_color: Rgba,
    /// Stable order, length 2..=4
    pub satellites: Vec<Satellite>,
}

impl OrbitSystem {
    /// Number of satellites wearing the highlight tone
    pub fn highlight_count(&self) -> usize {
        self.satellites
            .iter()
            .filter(|s| s.tone == SatelliteTone::Highlight)
            .count()
    }
}

/// The whole animated field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Seed the population was generated from (0 when built from a foreign RNG)
    pub seed: u64,
    /// Current surface size in pixels
    pub width: f32,
    pub height: f32,
    /// Population, in draw order
    pub systems: Vec<OrbitSystem>,
    /// Frames advanced so far
    pub frame: u64,
}

impl FieldState {
    pub fn new(seed: u64, width: f32, height: f32, systems: Vec<OrbitSystem>) -> Self {
        Self {
            seed,
            width,
            height,
            systems,
            frame: 0,
        }
    }

    /// Update the surface size. Systems stay where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn satellite_count(&self) -> usize {
        self.systems.iter().map(|s| s.satellites.len()).sum()
    }
}
