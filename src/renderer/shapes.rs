//! Scene drawing: road, vehicle, obstacles and text
//!
//! Entity coordinates are drawn as raw canvas pixels with no transform.

use glam::Vec2;

use super::surface::{Circle, LineStyle, Surface, TextStyle};
use crate::consts::ROAD_DASH_PERIOD;
use crate::sim::{Aabb, Obstacle, Vehicle};
use crate::viewport::Viewport;

pub mod palette {
    pub const ROAD: &str = "#444444";
    pub const LANE: &str = "#FFFFFF";
    pub const BODY: &str = "#FF5733";
    pub const WINDSHIELD: &str = "#C70039";
    pub const WINDOW: &str = "#2980B9";
    pub const WHEEL: &str = "#000";
    pub const OBSTACLE: &str = "#FFA500";
    pub const SCORE: &str = "#FFD700";
    pub const GAME_OVER: &str = "white";
}

pub const HUD_FONT: &str = "bold 30px Arial";

const LANE_STYLE: LineStyle = LineStyle {
    color: palette::LANE,
    width: 2.0,
    dash: [20.0, 20.0],
};

const LANE_COUNT: u32 = 3;
const WHEEL_RADIUS: f32 = 5.0;

/// Road background plus three dashed lane dividers scrolled by `road_offset`
pub fn draw_road<S: Surface>(surface: &mut S, viewport: &Viewport, road_offset: f64) {
    let size = viewport.size();
    surface.fill_rect(Aabb { pos: Vec2::ZERO, size }, palette::ROAD);

    let phase = (road_offset % ROAD_DASH_PERIOD as f64) as f32;
    let top = phase - ROAD_DASH_PERIOD;
    for i in 0..LANE_COUNT {
        let x = size.x * (i + 1) as f32 / (LANE_COUNT + 1) as f32;
        surface.stroke_line(Vec2::new(x, top), Vec2::new(x, size.y), &LANE_STYLE);
    }
}

/// Car composite: body, windshield band, window band, two rear wheels
pub fn draw_vehicle<S: Surface>(surface: &mut S, vehicle: &Vehicle) {
    let Vec2 { x, y } = vehicle.pos;
    let Vec2 { x: w, y: h } = vehicle.size;

    surface.fill_rect(vehicle.bounds(), palette::BODY);
    surface.fill_rect(Aabb::new(x + 5.0, y + 10.0, w - 10.0, h / 2.0), palette::WINDSHIELD);
    surface.fill_rect(Aabb::new(x + 10.0, y + 15.0, w - 20.0, h / 4.0), palette::WINDOW);

    let wheel_y = y + h - WHEEL_RADIUS;
    let wheels = [
        Circle {
            center: Vec2::new(x + 10.0, wheel_y),
            radius: WHEEL_RADIUS,
        },
        Circle {
            center: Vec2::new(x + w - 10.0, wheel_y),
            radius: WHEEL_RADIUS,
        },
    ];
    surface.fill_circles(&wheels, palette::WHEEL);
}

pub fn draw_obstacles<S: Surface>(surface: &mut S, obstacles: &[Obstacle]) {
    for obstacle in obstacles {
        surface.fill_rect(obstacle.bounds(), palette::OBSTACLE);
    }
}

pub fn score_label(score: u64) -> String {
    format!("Pontuação: {}", score)
}

pub fn draw_score<S: Surface>(surface: &mut S, score: u64) {
    let style = TextStyle {
        color: palette::SCORE,
        font: HUD_FONT,
    };
    surface.fill_text(&score_label(score), Vec2::new(20.0, 50.0), &style);
}

/// Centered terminal label, drawn over whatever the last frame left
pub fn draw_game_over<S: Surface>(surface: &mut S, viewport: &Viewport) {
    let size = viewport.size();
    let style = TextStyle {
        color: palette::GAME_OVER,
        font: HUD_FONT,
    };
    surface.fill_text("Game Over", Vec2::new(size.x / 2.0 - 70.0, size.y / 2.0), &style);
}
