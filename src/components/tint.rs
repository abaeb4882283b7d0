//! Color tint component for rendering sprites and text.
//!
//! For sprites the tint replaces `Color::WHITE` in draw calls; for text it
//! is multiplied with the `DynamicText` color. The HUD hides patch icons by
//! zeroing the tint's alpha.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color modulation applied when drawing the entity.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Multiply this tint with another color (component-wise).
    pub fn multiply(&self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color::new(
            mul(self.color.r, other.r),
            mul(self.color.g, other.g),
            mul(self.color.b, other.b),
            mul(self.color.a, other.a),
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_multiply_with_white_is_identity() {
        let t = Tint::new(100, 150, 200, 255);
        let result = t.multiply(Color::WHITE);
        assert_eq!(result.r, 100);
        assert_eq!(result.g, 150);
        assert_eq!(result.b, 200);
    }

    #[test]
    fn test_multiply_with_black_zeroes_out() {
        let t = Tint::new(100, 150, 200, 255);
        let result = t.multiply(Color::new(0, 0, 0, 0));
        assert_eq!(result.r, 0);
        assert_eq!(result.a, 0);
    }
}
