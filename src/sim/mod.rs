//! Field simulation module
//!
//! All motion lives here. This module is pure and deterministic:
//! - Seeded RNG only, injected at construction
//! - Fixed per-frame step, no wall clock
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{SpawnParams, initialize, initialize_with, spawn_system};
pub use state::{FieldState, OrbitSystem, Satellite, SatelliteTone};
pub use tick::{advance, advance_system, wrap_axis};
