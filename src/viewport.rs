//! Canvas sizing
//!
//! The canvas takes a fraction of the window that depends on which width
//! breakpoint the window falls into. Existing entities are never rescaled
//! when the viewport changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Window width breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// width <= 768
    Phone,
    /// 768 < width <= 1024
    Tablet,
    /// width > 1024
    Desktop,
}

impl Breakpoint {
    pub fn for_width(window_width: f64) -> Self {
        if window_width <= 768.0 {
            Breakpoint::Phone
        } else if window_width <= 1024.0 {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Fraction of the window (width, height) given to the canvas
    pub fn scale(&self) -> (f64, f64) {
        match self {
            Breakpoint::Phone => (1.0, 0.7),
            Breakpoint::Tablet => (0.95, 0.75),
            Breakpoint::Desktop => (0.8, 0.85),
        }
    }
}

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size the canvas from the window's inner dimensions.
    ///
    /// Canvas dimensions are integers, so fractional results are truncated
    /// the same way assigning them to `canvas.width` does.
    pub fn from_window(window_width: f64, window_height: f64) -> Self {
        let (sx, sy) = Breakpoint::for_width(window_width).scale();
        Self {
            width: (window_width * sx).max(0.0) as u32,
            height: (window_height * sy).max(0.0) as u32,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_breakpoint() {
        let vp = Viewport::from_window(500.0, 800.0);
        assert_eq!(vp, Viewport::new(500, 560));
    }

    #[test]
    fn test_tablet_breakpoint() {
        let vp = Viewport::from_window(900.0, 800.0);
        assert_eq!(vp, Viewport::new(855, 600));
    }

    #[test]
    fn test_desktop_breakpoint() {
        let vp = Viewport::from_window(1400.0, 1000.0);
        assert_eq!(vp, Viewport::new(1120, 850));
    }

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Phone);
        assert_eq!(Breakpoint::for_width(769.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(1025.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let a = Viewport::from_window(1280.0, 720.0);
        let b = Viewport::from_window(1280.0, 720.0);
        assert_eq!(a, b);
    }
}
