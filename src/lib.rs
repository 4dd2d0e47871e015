//! Road Rush - A scrolling-road arcade dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scoring)
//! - `renderer`: Draw calls against a 2D `Surface`
//! - `viewport`: Canvas sizing breakpoints
//! - `input`: Keyboard/touch mediation into directional intent
//! - `game`: Frame controller with the Running/GameOver loop
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod viewport;

pub use game::{FrameControl, Game};
pub use input::{InputEvent, InputMediator, InputMode, Intent};
pub use tuning::{Tuning, TuningError};
pub use viewport::Viewport;

/// Game configuration constants
pub mod consts {
    /// Player vehicle size (pixels)
    pub const VEHICLE_WIDTH: f32 = 50.0;
    pub const VEHICLE_HEIGHT: f32 = 80.0;
    /// Player vehicle movement per frame while a direction is held
    pub const VEHICLE_SPEED: f32 = 5.0;
    /// Distance from the bottom edge at spawn
    pub const VEHICLE_BOTTOM_OFFSET: f32 = 100.0;

    /// Obstacles are square
    pub const OBSTACLE_SIZE: f32 = 50.0;
    /// Chance of a new obstacle each frame
    pub const SPAWN_PROBABILITY: f32 = 0.02;

    /// Game speed at start (pixels per frame for obstacles and road)
    pub const BASE_GAME_SPEED: f32 = 2.0;
    /// Speed added at each score milestone
    pub const GAME_SPEED_STEP: f32 = 0.5;
    /// Score points between speed increases
    pub const POINTS_PER_SPEED_STEP: u64 = 100;

    /// Lane dash period (20 on + 20 off)
    pub const ROAD_DASH_PERIOD: f32 = 40.0;

    /// Minimum touch travel (pixels) between samples to register a direction
    pub const TOUCH_SENSITIVITY: f32 = 15.0;
}
