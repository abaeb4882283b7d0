use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in world units and an
/// offset if the texture is a spritesheet. The offset selects the frame;
/// the origin is the pivot (in pixels, relative to the frame's top-left)
/// used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Sprite {
    /// Sprite showing a full texture, pivoted at its center.
    pub fn full(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            flip_h: false,
            flip_v: false,
        }
    }

    /// Sprite showing one cell of a uniform sheet, pivoted at its center.
    pub fn sheet_cell(tex_key: impl Into<String>, cell: f32, col: u32, row: u32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: cell,
            height: cell,
            offset: Vector2 {
                x: col as f32 * cell,
                y: row as f32 * cell,
            },
            origin: Vector2 {
                x: cell * 0.5,
                y: cell * 0.5,
            },
            flip_h: false,
            flip_v: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_centers_origin() {
        let s = Sprite::full("title", 200.0, 80.0);
        assert_eq!(s.origin, Vector2 { x: 100.0, y: 40.0 });
        assert_eq!(s.offset, Vector2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_sheet_cell_offset() {
        let s = Sprite::sheet_cell("player", 48.0, 3, 2);
        assert_eq!(s.offset, Vector2 { x: 144.0, y: 96.0 });
        assert_eq!(s.width, 48.0);
        assert_eq!(s.height, 48.0);
    }
}
