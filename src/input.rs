//! Input mediation
//!
//! Platform callbacks push `InputEvent`s; the frame loop drains them once per
//! frame and reads the resulting `Intent`. Only one device kind is active,
//! chosen at startup.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TOUCH_SENSITIVITY;

/// Held directions. Not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intent {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction (arrow keys only)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Which device drives the intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Keyboard,
    Touch,
}

impl InputMode {
    pub fn detect(has_touch: bool) -> Self {
        if has_touch {
            InputMode::Touch
        } else {
            InputMode::Keyboard
        }
    }
}

/// Raw device events, already stripped of platform types
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// First touch point, if the event carried one
    TouchStart(Option<Vec2>),
    TouchMove(Option<Vec2>),
    TouchEnd,
}

/// Single-consumer queue of device events folded into an `Intent`
#[derive(Debug)]
pub struct InputMediator {
    mode: InputMode,
    pending: VecDeque<InputEvent>,
    intent: Intent,
    /// Last sampled touch point; deltas are measured against it
    touch_ref: Option<Vec2>,
    sensitivity: f32,
}

impl InputMediator {
    pub fn new(mode: InputMode) -> Self {
        Self::with_sensitivity(mode, TOUCH_SENSITIVITY)
    }

    pub fn with_sensitivity(mode: InputMode, sensitivity: f32) -> Self {
        Self {
            mode,
            pending: VecDeque::new(),
            intent: Intent::default(),
            touch_ref: None,
            sensitivity,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Events queued since the last `sample`
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop queued events without applying them
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    /// Apply queued events in arrival order and return the current intent
    pub fn sample(&mut self) -> Intent {
        while let Some(event) = self.pending.pop_front() {
            self.apply(event);
        }
        self.intent
    }

    fn apply(&mut self, event: InputEvent) {
        match (self.mode, event) {
            (InputMode::Keyboard, InputEvent::KeyDown(key)) => {
                if let Some(dir) = Direction::from_key(&key) {
                    self.intent.set(dir, true);
                }
            }
            (InputMode::Keyboard, InputEvent::KeyUp(key)) => {
                if let Some(dir) = Direction::from_key(&key) {
                    self.intent.set(dir, false);
                }
            }
            (InputMode::Touch, InputEvent::TouchStart(point)) => {
                if point.is_some() {
                    self.touch_ref = point;
                }
            }
            (InputMode::Touch, InputEvent::TouchMove(Some(point))) => {
                let Some(prev) = self.touch_ref else {
                    return;
                };
                let delta = point - prev;
                let s = self.sensitivity;
                self.intent = Intent {
                    left: delta.x < -s,
                    right: delta.x > s,
                    up: delta.y < -s,
                    down: delta.y > s,
                };
                self.touch_ref = Some(point);
            }
            (InputMode::Touch, InputEvent::TouchEnd) => {
                self.intent.clear();
            }
            // Events from the inactive device, or moves without a point
            _ => {}
        }
    }
}
