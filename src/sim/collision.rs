//! Axis-aligned bounding box collision
//!
//! Overlap uses strict inequalities on both axes, so boxes that only share
//! an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Axis-aligned rectangle in canvas pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True if the interiors of the two boxes intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x && a_max.x > other.pos.x && self.pos.y < b_max.y && a_max.y > other.pos.y
    }
}

/// True if any obstacle overlaps the vehicle box
pub fn check_collision(vehicle: &Aabb, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| vehicle.overlaps(&o.bounds()))
}
