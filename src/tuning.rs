//! Data-driven game balance
//!
//! Physics and world constants loaded from JSON. Every field has a default,
//! so a tuning file only needs to list what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Player physics, in world units per second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Downward acceleration while airborne (units/s²)
    pub gravity: f32,
    /// Horizontal acceleration while a direction is held (units/s²)
    pub walk_accel: f32,
    /// Horizontal deceleration with no direction held (units/s²)
    pub neutral_decay: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Cap on player-driven horizontal speed
    pub max_velocity: f32,
    /// Player y beyond which the player has fallen out of the world
    pub fall_death_y: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            gravity: 240.0,
            walk_accel: 300.0,
            neutral_decay: 120.0,
            jump_velocity: -150.0,
            max_velocity: 72.0,
            fall_death_y: 800.0,
        }
    }
}

/// World rules applied by the simulation loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Player x beyond which the world scrolls left
    pub scroll_threshold_x: f32,
    /// Scroll rate (units/s)
    pub scroll_speed: f32,
    /// Score awarded per coin
    pub coin_value: f32,
    /// Distance from a ground tile's center to the player's snapped center
    pub ground_snap_offset: f32,
}

impl Default for WorldTuning {
    // Coins are worth a flat 3.14, not pi
    #[allow(clippy::approx_constant)]
    fn default() -> Self {
        Self {
            scroll_threshold_x: 800.0,
            scroll_speed: 400.0,
            coin_value: 3.14,
            ground_snap_offset: 56.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub world: WorldTuning,
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
