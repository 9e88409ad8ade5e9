//! Run configuration
//!
//! Defaults mirror the reference layout (ten radius-100 bubbles, 80/20
//! vertical split). Hosts can persist and reload the struct as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Bubbles placed per round
    pub sprite_count: usize,
    /// Bubble radius in pixels
    pub bubble_radius: f32,
    /// Fraction of the surface height given to the sprite zone
    pub divide_ratio: f32,
    /// Drift speed range for new bubbles (pixels/second)
    pub drift_speed_min: f32,
    pub drift_speed_max: f32,
    /// RGBA clear color
    pub background: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprite_count: SPRITE_COUNT,
            bubble_radius: BUBBLE_RADIUS,
            divide_ratio: VERTICAL_DIVIDE_RATIO,
            drift_speed_min: DRIFT_SPEED_MIN,
            drift_speed_max: DRIFT_SPEED_MAX,
            background: BACKGROUND_COLOR,
        }
    }
}

impl Settings {
    /// Clamp out-of-range values instead of failing; a bad config file
    /// must not be able to crash the loop
    pub fn sanitized(mut self) -> Self {
        self.sprite_count = self.sprite_count.max(1);
        self.bubble_radius = if self.bubble_radius.is_finite() {
            self.bubble_radius.max(1.0)
        } else {
            BUBBLE_RADIUS
        };
        self.divide_ratio = if self.divide_ratio.is_finite() {
            self.divide_ratio.clamp(0.05, 1.0)
        } else {
            VERTICAL_DIVIDE_RATIO
        };
        if !self.drift_speed_min.is_finite() || self.drift_speed_min < 0.0 {
            self.drift_speed_min = 0.0;
        }
        if !self.drift_speed_max.is_finite() || self.drift_speed_max < self.drift_speed_min {
            self.drift_speed_max = self.drift_speed_min;
        }
        self
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings file: {e}"),
            },
            Err(e) => log::info!("No settings file ({e}); using defaults"),
        }
        Self::default()
    }

    /// Save as JSON; failures are logged, not fatal
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings: {e}"),
            },
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let settings = Settings::default();
        assert_eq!(settings.sprite_count, 10);
        assert_eq!(settings.bubble_radius, 100.0);
        assert_eq!(settings.divide_ratio, 0.8);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            sprite_count: 4,
            bubble_radius: 25.0,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_sanitized_clamps_bad_values() {
        let settings = Settings {
            sprite_count: 0,
            bubble_radius: -5.0,
            divide_ratio: 1.7,
            drift_speed_min: 50.0,
            drift_speed_max: 10.0,
            ..Settings::default()
        }
        .sanitized();

        assert_eq!(settings.sprite_count, 1);
        assert_eq!(settings.bubble_radius, 1.0);
        assert_eq!(settings.divide_ratio, 1.0);
        assert_eq!(settings.drift_speed_max, settings.drift_speed_min);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let settings = Settings::load("/nonexistent/bubble-count.json");
        assert_eq!(settings, Settings::default());
    }
}
