use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Create a MapPosition from an existing Vector2.
    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
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
        let pos = MapPosition::new(10.0, 20.0);
        assert!(approx_eq(pos.pos.x, 10.0));
        assert!(approx_eq(pos.pos.y, 20.0));
    }

    #[test]
    fn test_from_vec() {
        let pos = MapPosition::from_vec(Vector2 { x: -3.0, y: 4.5 });
        assert!(approx_eq(pos.pos.x, -3.0));
        assert!(approx_eq(pos.pos.y, 4.5));
    }
}
