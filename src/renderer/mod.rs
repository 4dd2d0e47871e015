//! 2D canvas rendering module
//!
//! Every frame is fully redrawn through the `Surface` trait.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{draw_game_over, draw_obstacles, draw_road, draw_score, draw_vehicle};
pub use surface::{Circle, LineStyle, NullSurface, Surface, TextStyle};
