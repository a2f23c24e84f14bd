//! Field settings
//!
//! Persisted as JSON in LocalStorage on web. Missing fields take defaults so
//! older stored blobs keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SYSTEM_COUNT, HIGHLIGHT_PROBABILITY};
use crate::sim::SpawnParams;

/// Animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Number of orbit systems
    pub system_count: usize,
    /// Fixed seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Chance a system gets one highlighted satellite (0.0 - 1.0)
    pub highlight_probability: f64,
    /// Stroke the faint orbit ring behind each system
    pub show_orbit_guides: bool,

    // === Accessibility ===
    /// Systems stay put; satellites still orbit
    pub reduced_motion: bool,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            system_count: DEFAULT_SYSTEM_COUNT,
            seed: None,
            highlight_probability: HIGHLIGHT_PROBABILITY,
            show_orbit_guides: true,
            reduced_motion: false,
        }
    }
}

impl FieldSettings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "orbit_field_settings";

    /// Highlight probability forced into [0, 1]; non-finite values fall back to the default
    fn clamped_probability(&self) -> f64 {
        if self.highlight_probability.is_finite() {
            self.highlight_probability.clamp(0.0, 1.0)
        } else {
            HIGHLIGHT_PROBABILITY
        }
    }

    /// Clamp out-of-range values
    pub fn validated(mut self) -> Self {
        self.highlight_probability = self.clamped_probability();
        self
    }

    /// Spawn parameters derived from these settings
    pub fn spawn_params(&self) -> SpawnParams {
        SpawnParams {
            highlight_probability: self.clamped_probability(),
            drift_scale: if self.reduced_motion { 0.0 } else { 1.0 },
        }
    }

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<FieldSettings>(json) {
            Ok(settings) => settings.validated(),
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
