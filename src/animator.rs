//! Frame driver
//!
//! Owns the field and runs one update-then-draw step per scheduled frame.
//! The host decides when frames happen (`requestAnimationFrame` on web, a
//! plain loop natively); the animator never looks at a clock.

use rand::Rng;

use crate::renderer::{DrawSurface, draw};
use crate::settings::FieldSettings;
use crate::sim::{self, FieldState, SpawnParams};

pub struct OrbitFieldAnimator {
    state: FieldState,
    show_guides: bool,
}

impl OrbitFieldAnimator {
    /// Build a field from settings. `fallback_seed` is used when the
    /// settings don't pin one.
    pub fn new(settings: &FieldSettings, width: f32, height: f32, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        let state = sim::initialize(
            seed,
            width,
            height,
            settings.system_count,
            &settings.spawn_params(),
        );
        log::info!(
            "Orbit field: {} systems, {} satellites, seed {}",
            state.systems.len(),
            state.satellite_count(),
            seed
        );
        Self {
            state,
            show_guides: settings.show_orbit_guides,
        }
    }

    /// Build a default-styled field from an injected generator
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, count: usize) -> Self {
        Self {
            state: sim::initialize_with(rng, width, height, count, &SpawnParams::default()),
            show_guides: true,
        }
    }

    /// Wrap an existing state (e.g. a deserialized snapshot)
    pub fn from_state(state: FieldState) -> Self {
        Self {
            state,
            show_guides: true,
        }
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Move every system one frame forward
    pub fn advance(&mut self) {
        sim::advance(&mut self.state);
    }

    /// Render the current state; does not move anything
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        draw(&self.state, surface, self.show_guides);
    }

    /// One scheduled frame: advance, then draw
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.advance();
        self.draw(surface);
    }

    /// Viewport changed: new wrap bounds, systems stay where they are
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("Resize to {}x{}", width, height);
        self.state.resize(width, height);
    }

    /// Resize both the surface backing store and the wrap bounds
    pub fn resize_surface<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        surface.resize(width, height);
        self.resize(width as f32, height as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Raster;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_settings_seed_wins() {
        let settings = FieldSettings {
            seed: Some(5),
            ..Default::default()
        };
        let a = OrbitFieldAnimator::new(&settings, 800.0, 600.0, 111);
        let b = OrbitFieldAnimator::new(&settings, 800.0, 600.0, 222);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.state().seed, 5);
    }

    #[test]
    fn test_fallback_seed_used() {
        let a = OrbitFieldAnimator::new(&FieldSettings::default(), 800.0, 600.0, 31);
        assert_eq!(a.state().seed, 31);
        assert_eq!(a.state().systems.len(), 10);
    }

    #[test]
    fn test_determinism_over_frames() {
        let mut a = OrbitFieldAnimator::with_rng(&mut Pcg32::seed_from_u64(4), 640.0, 480.0, 10);
        let mut b = OrbitFieldAnimator::with_rng(&mut Pcg32::seed_from_u64(4), 640.0, 480.0, 10);
        let mut raster_a = Raster::new(640, 480);
        let mut raster_b = Raster::new(640, 480);

        for _ in 0..120 {
            a.frame(&mut raster_a);
            b.frame(&mut raster_b);
        }

        assert_eq!(a.state(), b.state());
        assert_eq!(raster_a, raster_b);
        assert_eq!(a.state().frame, 120);
    }

    #[test]
    fn test_frame_changes_output() {
        let mut animator = OrbitFieldAnimator::with_rng(&mut Pcg32::seed_from_u64(8), 320.0, 240.0, 10);
        let mut raster = Raster::new(320, 240);

        animator.draw(&mut raster);
        let before = raster.as_bytes().to_vec();
        for _ in 0..30 {
            animator.frame(&mut raster);
        }
        assert_ne!(before, raster.as_bytes());
    }

    #[test]
    fn test_resize_surface() {
        let mut animator = OrbitFieldAnimator::with_rng(&mut Pcg32::seed_from_u64(2), 800.0, 600.0, 3);
        let centers: Vec<_> = animator.state().systems.iter().map(|s| s.center).collect();
        let mut raster = Raster::new(800, 600);

        animator.resize_surface(&mut raster, 400, 300);

        assert_eq!(raster.width(), 400.0);
        assert_eq!(animator.state().width, 400.0);
        assert_eq!(animator.state().height, 300.0);
        let after: Vec<_> = animator.state().systems.iter().map(|s| s.center).collect();
        assert_eq!(centers, after);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut animator = OrbitFieldAnimator::with_rng(&mut Pcg32::seed_from_u64(6), 800.0, 600.0, 4);
        animator.advance();
        let json = serde_json::to_string(animator.state()).unwrap();
        let restored: FieldState = serde_json::from_str(&json).unwrap();
        let mut restored = OrbitFieldAnimator::from_state(restored);
        assert_eq!(restored.state(), animator.state());

        animator.advance();
        restored.advance();
        assert_eq!(restored.state(), animator.state());
    }
}
