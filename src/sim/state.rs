//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`. The RNG is owned
//! by the caller so the state stays plain data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Collision happened. Permanent for the lifetime of the state.
    GameOver,
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels moved per frame per held direction
    pub speed: f32,
}

impl Vehicle {
    /// Place the vehicle centered horizontally near the bottom of the viewport
    pub fn spawn(viewport: &Viewport, speed: f32) -> Self {
        let view = viewport.size();
        Self {
            pos: Vec2::new(
                view.x / 2.0 - VEHICLE_WIDTH / 2.0,
                view.y - VEHICLE_BOTTOM_OFFSET,
            ),
            size: Vec2::new(VEHICLE_WIDTH, VEHICLE_HEIGHT),
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Upper bound of the top-left corner that keeps the vehicle on screen
    #[inline]
    pub fn max_pos(&self, viewport: &Viewport) -> Vec2 {
        viewport.size() - self.size
    }
}

/// A falling block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

/// Complete game state (deterministic given the RNG, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values in effect for this run
    pub tuning: Tuning,
    /// Canvas size used for clamping, culling and spawning
    pub viewport: Viewport,
    pub vehicle: Vehicle,
    /// Falling obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Descent rate of obstacles and road, pixels per frame
    pub game_speed: f32,
    /// Scroll accumulator for lane dashes, only read modulo the dash period
    pub road_offset: f64,
    /// Frames simulated so far
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            vehicle: Vehicle::spawn(&viewport, tuning.vehicle_speed),
            game_speed: tuning.base_game_speed,
            tuning,
            viewport,
            obstacles: Vec::new(),
            score: 0,
            road_offset: 0.0,
            time_ticks: 0,
            phase: GamePhase::Running,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Adopt a new canvas size.
    ///
    /// Vehicle and obstacle coordinates are left as they are; after a
    /// shrink the vehicle may sit outside the canvas until it is moved.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
