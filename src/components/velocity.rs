//! Plain velocity for cosmetic entities.
//!
//! Exhaust particles and other decorations move via simple Euler
//! integration in the movement system; they never touch the physics world.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in pixels per second, integrated into
/// [`MapPosition`](crate::components::mapposition::MapPosition) each frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Velocity {
    pub v: Vector2,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            v: Vector2 { x, y },
        }
    }

    pub fn from_vec(v: Vector2) -> Self {
        Self { v }
    }
}
