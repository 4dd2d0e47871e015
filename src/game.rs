//! Frame controller
//!
//! Owns the game state, input queue and RNG, and runs one animation frame
//! at a time. The returned `FrameControl` tells the host whether to schedule
//! another frame; once the game is over it never asks for one again.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::{InputEvent, InputMediator, InputMode};
use crate::renderer::{Surface, draw_game_over, draw_obstacles, draw_road, draw_score, draw_vehicle};
use crate::sim::{self, GamePhase, GameState};
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Whether the host should request another animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Halt,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: InputMediator,
    rng: Pcg32,
    seed: u64,
}

impl Game {
    pub fn new(viewport: Viewport, mode: InputMode, seed: u64) -> Self {
        Self::with_tuning(viewport, mode, seed, Tuning::default())
    }

    pub fn with_tuning(viewport: Viewport, mode: InputMode, seed: u64, tuning: Tuning) -> Self {
        let input = InputMediator::with_sensitivity(mode, tuning.touch_sensitivity);
        Self {
            state: GameState::new(viewport, tuning),
            input,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn input_mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Queue a device event for the next frame.
    ///
    /// Listeners stay attached after the loop halts, so events are dropped
    /// once the game is over.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.state.is_over() {
            return;
        }
        self.input.push(event);
    }

    /// Recompute the canvas size for a window size and return it.
    ///
    /// Entities keep their coordinates.
    pub fn resize(&mut self, window_width: f64, window_height: f64) -> Viewport {
        let viewport = Viewport::from_window(window_width, window_height);
        if viewport != self.state.viewport {
            log::debug!(
                "Viewport {}x{} -> {}x{}",
                self.state.viewport.width,
                self.state.viewport.height,
                viewport.width,
                viewport.height
            );
        }
        self.state.set_viewport(viewport);
        viewport
    }

    /// Run one animation frame: draw, simulate, test collision.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> FrameControl {
        if self.state.is_over() {
            self.input.discard_pending();
            draw_game_over(surface, &self.state.viewport);
            return FrameControl::Halt;
        }

        let intent = self.input.sample();
        let viewport = self.state.viewport;

        surface.clear(viewport.size());
        draw_road(surface, &viewport, self.state.road_offset);

        sim::advance(&mut self.state, &intent, &mut self.rng);

        draw_vehicle(surface, &self.state.vehicle);
        draw_obstacles(surface, &self.state.obstacles);
        draw_score(surface, self.state.score);

        if sim::resolve(&mut self.state) == GamePhase::GameOver {
            if log::log_enabled!(log::Level::Debug) {
                if let Ok(json) = serde_json::to_string(&self.state) {
                    log::debug!("Final state: {}", json);
                }
            }
        }

        // The game-over label is drawn by the next frame, which then halts
        FrameControl::Continue
    }

    /// Run frames until the loop halts or `max_frames` have continued.
    ///
    /// Returns the number of frames that asked for a successor.
    pub fn run_headless<S: Surface>(&mut self, surface: &mut S, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.frame(surface) == FrameControl::Continue {
            frames += 1;
        }
        frames
    }
}
