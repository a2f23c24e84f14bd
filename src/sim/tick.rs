//! Per-frame field update
//!
//! One call advances every system by exactly one frame. There is no time
//! delta: speeds are expressed per frame.

use super::state::{FieldState, OrbitSystem};

/// Wrap one coordinate around `[-margin, extent + margin]`.
///
/// Leaving past either edge teleports to the opposite margin, so a system is
/// fully off screen before it reappears.
#[inline]
pub fn wrap_axis(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Advance a single system on a `width` x `height` surface
pub fn advance_system(system: &mut OrbitSystem, width: f32, height: f32) {
    for sat in &mut system.satellites {
        sat.angle += sat.angular_speed;
    }

    system.center += system.velocity;

    let margin = system.orbit_radius;
    system.center.x = wrap_axis(system.center.x, width, margin);
    system.center.y = wrap_axis(system.center.y, height, margin);
}

/// Advance the whole field by one frame
pub fn advance(state: &mut FieldState) {
    let (width, height) = (state.width, state.height);
    for system in &mut state.systems {
        advance_system(system, width, height);
    }
    state.frame += 1;
}
