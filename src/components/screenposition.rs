//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. Used for HUD elements that must not move with the
//! camera. For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space position (pivot) for an entity.
///
/// The render system draws these after the world pass, without the camera
/// transform.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    /// 2D coordinates in render-target pixels.
    pub pos: Vector2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_creates_correct_position() {
        let pos = ScreenPosition::new(10.0, 20.0);
        assert!(approx_eq(pos.pos.x, 10.0));
        assert!(approx_eq(pos.pos.y, 20.0));
    }

    #[test]
    fn test_default_is_zero() {
        let pos = ScreenPosition::default();
        assert!(approx_eq(pos.pos.x, 0.0));
        assert!(approx_eq(pos.pos.y, 0.0));
    }
}
