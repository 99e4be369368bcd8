use std::env;

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::vector::Vector2f;

/// How many screen pixels one simulated meter spans.
pub const PIXELS_PER_METER: f32 = 64.0;

/// Downward pull applied to new entities, in meters/second². y grows downward.
pub const GRAVITY: Vector2f = Vector2f::new(0.0, 9.81);

/// Per-simulation tuning that new entities are stamped with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    pub gravity: Vector2f,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_METER,
            gravity: GRAVITY,
        }
    }
}

impl PhysicsConfig {
    /// Parses a config from json. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PhysicsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `BAS_PIXELS_PER_METER`, `BAS_GRAVITY_X` and `BAS_GRAVITY_Y`; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            pixels_per_meter: env_f32("BAS_PIXELS_PER_METER").unwrap_or(defaults.pixels_per_meter),
            gravity: Vector2f::new(
                env_f32("BAS_GRAVITY_X").unwrap_or(defaults.gravity.x),
                env_f32("BAS_GRAVITY_Y").unwrap_or(defaults.gravity.y),
            ),
        };
        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(%err, "ignoring physics config from environment");
                defaults
            }
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.pixels_per_meter.is_finite() || self.pixels_per_meter <= 0.0 {
            return Err(PhysicsError::Config(format!(
                "pixels_per_meter must be positive and finite, got {}",
                self.pixels_per_meter
            )));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::Config(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        Ok(())
    }
}

fn env_f32(key: &str) -> Option<f32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_64_px_and_earth_gravity() {
        let config = PhysicsConfig::default();
        assert_eq!(config.pixels_per_meter, 64.0);
        assert_eq!(config.gravity, Vector2f::new(0.0, 9.81));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PhysicsConfig::from_json_str(r#"{ "pixels_per_meter": 32.0 }"#).unwrap();
        assert_eq!(config.pixels_per_meter, 32.0);
        assert_eq!(config.gravity, GRAVITY);

        let config =
            PhysicsConfig::from_json_str(r#"{ "gravity": { "x": 1.0, "y": -2.0 } }"#).unwrap();
        assert_eq!(config.gravity, Vector2f::new(1.0, -2.0));
    }

    #[test]
    fn rejects_bad_scale() {
        let err = PhysicsConfig::from_json_str(r#"{ "pixels_per_meter": 0.0 }"#).unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = PhysicsConfig::from_json_str("{ pixels_per_meter: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid physics config"));
    }
}
