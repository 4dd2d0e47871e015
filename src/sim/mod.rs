//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per animation frame
//! - Caller-owned seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision};
pub use state::{GamePhase, GameState, Obstacle, Vehicle};
pub use tick::{advance, advance_obstacles, maybe_spawn_obstacle, move_vehicle, resolve, tick};
