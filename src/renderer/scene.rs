//! Scene composition: turns a `FieldState` into surface draw calls

use super::surface::DrawSurface;
use crate::consts::ORBIT_GUIDE_COLOR;
use crate::sim::{FieldState, OrbitSystem};

/// Draw one system: orbit guide, planet, then satellites in order
pub fn draw_system<S: DrawSurface + ?Sized>(system: &OrbitSystem, surface: &mut S, show_guide: bool) {
    if show_guide {
        surface.stroke_circle(system.center, system.orbit_radius, ORBIT_GUIDE_COLOR);
    }

    surface.fill_circle(system.center, system.planet_radius, system.planet_color);

    for sat in &system.satellites {
        let pos = sat.position(system.center, system.orbit_radius);
        surface.fill_circle(pos, system.satellite_radius, sat.tone.color());
    }
}

/// Clear the surface and draw every system in population order
pub fn draw<S: DrawSurface + ?Sized>(state: &FieldState, surface: &mut S, show_guides: bool) {
    surface.clear();
    for system in &state.systems {
        draw_system(system, surface, show_guides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NEUTRAL_COLOR, PLANET_COLOR};
    use crate::renderer::{Raster, Rgba};
    use crate::sim::{Satellite, SatelliteTone, SpawnParams, initialize};
    use glam::Vec2;

    /// Records calls instead of rasterizing
    #[derive(Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl DrawSurface for CallLog {
        fn width(&self) -> f32 {
            200.0
        }
        fn height(&self) -> f32 {
            200.0
        }
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn stroke_circle(&mut self, _center: Vec2, radius: f32, _color: Rgba) {
            self.calls.push(format!("stroke {}", radius));
        }
        fn fill_circle(&mut self, _center: Vec2, radius: f32, color: Rgba) {
            self.calls.push(format!("fill {} {}", radius, color));
        }
        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    fn one_system() -> FieldState {
        let system = OrbitSystem {
            center: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            planet_radius: 10.0,
            orbit_radius: 40.0,
            satellite_radius: 4.0,
            planet_color: PLANET_COLOR,
            satellites: vec![
                Satellite {
                    angle: 0.0,
                    angular_speed: 0.01,
                    tone: SatelliteTone::Neutral,
                },
                Satellite {
                    angle: 1.0,
                    angular_speed: 0.01,
                    tone: SatelliteTone::Highlight,
                },
            ],
        };
        FieldState::new(0, 200.0, 200.0, vec![system])
    }

    #[test]
    fn test_draw_order() {
        let mut log = CallLog::default();
        draw(&one_system(), &mut log, true);
        assert_eq!(
            log.calls,
            vec![
                "clear".to_string(),
                "stroke 40".to_string(),
                "fill 10 #f39c12".to_string(),
                "fill 4 #bdc3c7".to_string(),
                "fill 4 #27ae60".to_string(),
            ]
        );
    }

    #[test]
    fn test_guides_can_be_hidden() {
        let mut log = CallLog::default();
        draw(&one_system(), &mut log, false);
        assert!(log.calls.iter().all(|c| !c.starts_with("stroke")));
        assert_eq!(log.calls.len(), 4);
    }

    #[test]
    fn test_satellite_drawn_on_orbit() {
        let mut raster = Raster::new(200, 200);
        draw(&one_system(), &mut raster, false);
        // First satellite sits at angle 0: (140, 100)
        let p = raster.pixel(140, 100).unwrap();
        assert_eq!((p.r, p.g, p.b), (NEUTRAL_COLOR.r, NEUTRAL_COLOR.g, NEUTRAL_COLOR.b));
        // Between planet and ring nothing is painted
        assert_eq!(raster.pixel(125, 100).unwrap().a, 0);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let state = initialize(77, 320.0, 240.0, 10, &SpawnParams::default());
        let mut raster = Raster::new(320, 240);

        draw(&state, &mut raster, true);
        let first = raster.as_bytes().to_vec();
        draw(&state, &mut raster, true);
        assert_eq!(first, raster.as_bytes());
    }
}
