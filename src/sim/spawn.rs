//! Field generation
//!
//! Every random parameter is drawn from the caller's generator, so a seeded
//! `Pcg32` reproduces the same field exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::{FieldState, OrbitSystem, Satellite, SatelliteTone};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Tunables for spawning. Ranges come from `consts`.
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub highlight_probability: f64,
    /// Scales drift velocity (0 freezes systems in place)
    pub drift_scale: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            highlight_probability: HIGHLIGHT_PROBABILITY,
            drift_scale: 1.0,
        }
    }
}

/// Sample uniformly in `[0, extent)`, or 0 for a degenerate extent
fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Build one system centered somewhere on a `width` x `height` surface
pub fn spawn_system<R: Rng + ?Sized>(
    rng: &mut R,
    width: f32,
    height: f32,
    params: &SpawnParams,
) -> OrbitSystem {
    let center = Vec2::new(sample_extent(rng, width), sample_extent(rng, height));
    let planet_radius = rng.random_range(PLANET_RADIUS_MIN..PLANET_RADIUS_MAX);
    let orbit_radius =
        planet_radius + rng.random_range(ORBIT_MARGIN_MIN..ORBIT_MARGIN_MAX);
    let orbit_speed = rng.random_range(ORBIT_SPEED_MIN..ORBIT_SPEED_MAX);

    // Slow orbiters also drift slowly
    let drift_angle = rng.random_range(0.0..TAU);
    let velocity =
        polar_to_cartesian(orbit_speed * DRIFT_MULTIPLIER, drift_angle) * params.drift_scale;

    let satellite_radius = rng.random_range(SATELLITE_RADIUS_MIN..SATELLITE_RADIUS_MAX);

    let count = rng.random_range(SATELLITES_MIN..=SATELLITES_MAX);
    let highlight_index = if rng.random_bool(params.highlight_probability) {
        Some(rng.random_range(0..count))
    } else {
        None
    };

    let satellites = (0..count)
        .map(|i| {
            let angle = rng.random_range(0.0..TAU);
            let angular_speed = orbit_speed
                * rng.random_range(SATELLITE_SPEED_JITTER_MIN..SATELLITE_SPEED_JITTER_MAX);
            let tone = if highlight_index == Some(i) {
                SatelliteTone::Highlight
            } else {
                SatelliteTone::Neutral
            };
            Satellite {
                angle,
                angular_speed,
                tone,
            }
        })
        .collect();

    OrbitSystem {
        center,
        velocity,
        planet_radius,
        orbit_radius,
        satellite_radius,
        planet_color: PLANET_COLOR,
        satellites,
    }
}

/// Generate a field of `count` systems from an injected generator
pub fn initialize_with<R: Rng + ?Sized>(
    rng: &mut R,
    width: f32,
    height: f32,
    count: usize,
    params: &SpawnParams,
) -> FieldState {
    let systems: Vec<OrbitSystem> = (0..count)
        .map(|_| spawn_system(rng, width, height, params))
        .collect();

    for (i, system) in systems.iter().enumerate() {
        log::debug!(
            "system {}: center=({:.1}, {:.1}) orbit_radius={:.1} satellites={} highlight={}",
            i,
            system.center.x,
            system.center.y,
            system.orbit_radius,
            system.satellites.len(),
            system.highlight_count() > 0
        );
    }

    FieldState::new(0, width, height, systems)
}

/// Generate a field deterministically from a seed
pub fn initialize(seed: u64, width: f32, height: f32, count: usize, params: &SpawnParams) -> FieldState {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = initialize_with(&mut rng, width, height, count, params);
    state.seed = seed;
    state
}
