//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! game's render resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
///
/// This represents the actual OS window dimensions, not the game's internal
/// render resolution. Use this for letterbox/pillarbox calculations when
/// scaling the render target to fit the window.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Calculate the destination rectangle for letterboxed rendering.
    ///
    /// Given the game's render resolution, returns a rectangle that:
    /// - Preserves the game's aspect ratio
    /// - Fits within the window bounds
    /// - Centers the content (letterbox/pillarbox as needed)
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let (game_w, game_h) = (game_width as f32, game_height as f32);
        let (window_w, window_h) = (self.w as f32, self.h as f32);

        // Scale to the limiting axis and center; the other axis gets bars.
        let scale = (window_w / game_w).min(window_h / game_h);
        let (scaled_w, scaled_h) = (game_w * scale, game_h * scale);
        Rectangle {
            x: (window_w - scaled_w) / 2.0,
            y: (window_h - scaled_h) / 2.0,
            width: scaled_w,
            height: scaled_h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_window_pillarboxes() {
        let window = WindowSize { w: 2560, h: 720 };
        let rect = window.calculate_letterbox(640, 360);
        assert_eq!(rect.height, 720.0);
        assert_eq!(rect.width, 1280.0);
        assert_eq!(rect.x, 640.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let window = WindowSize { w: 640, h: 720 };
        let rect = window.calculate_letterbox(640, 360);
        assert_eq!(rect.width, 640.0);
        assert_eq!(rect.height, 360.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 180.0);
    }
}
