//! Data-driven game balance
//!
//! Defaults are the values in `consts`. The browser build always runs with
//! the defaults; the native headless runner can load overrides from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vehicle pixels per frame per held direction
    pub vehicle_speed: f32,
    /// Starting game speed
    pub base_game_speed: f32,
    /// Speed added at each milestone
    pub game_speed_step: f32,
    /// Score points per milestone
    pub points_per_speed_step: u64,
    /// Per-frame spawn chance, 0.0 - 1.0
    pub spawn_probability: f32,
    /// Obstacle edge length
    pub obstacle_size: f32,
    /// Touch travel needed to register a direction
    pub touch_sensitivity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            vehicle_speed: VEHICLE_SPEED,
            base_game_speed: BASE_GAME_SPEED,
            game_speed_step: GAME_SPEED_STEP,
            points_per_speed_step: POINTS_PER_SPEED_STEP,
            spawn_probability: SPAWN_PROBABILITY,
            obstacle_size: OBSTACLE_SIZE,
            touch_sensitivity: TOUCH_SENSITIVITY,
        }
    }
}

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field is outside its allowed range
    #[error("tuning field `{field}` out of range: {value}")]
    Invalid { field: &'static str, value: String },
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    value: value.to_string(),
                })
            }
        }

        positive("vehicle_speed", self.vehicle_speed)?;
        positive("base_game_speed", self.base_game_speed)?;
        positive("obstacle_size", self.obstacle_size)?;

        if !(self.game_speed_step.is_finite() && self.game_speed_step >= 0.0) {
            return Err(TuningError::Invalid {
                field: "game_speed_step",
                value: self.game_speed_step.to_string(),
            });
        }
        if self.points_per_speed_step == 0 {
            return Err(TuningError::Invalid {
                field: "points_per_speed_step",
                value: "0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(TuningError::Invalid {
                field: "spawn_probability",
                value: self.spawn_probability.to_string(),
            });
        }
        if !(self.touch_sensitivity.is_finite() && self.touch_sensitivity >= 0.0) {
            return Err(TuningError::Invalid {
                field: "touch_sensitivity",
                value: self.touch_sensitivity.to_string(),
            });
        }
        Ok(())
    }
}
