//! Fixed-resolution render target.
//!
//! The game draws into a framebuffer at its internal resolution; the render
//! system then scales that texture into the window with letterboxing. Point
//! filtering keeps the pixel art sharp at any window size.
//!
//! Non-send: `RenderTexture2D` wraps GPU state owned by the main thread.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    /// Internal render width in pixels.
    pub width: u32,
    /// Internal render height in pixels.
    pub height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        let target = Self {
            texture,
            width,
            height,
        };
        target.apply_point_filter();
        Ok(target)
    }

    /// Replace the framebuffer with one at a new resolution.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        self.texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to recreate render texture: {}", e))?;
        self.width = width;
        self.height = height;
        self.apply_point_filter();
        Ok(())
    }

    fn apply_point_filter(&self) {
        unsafe {
            ffi::SetTextureFilter(
                self.texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
    }

    /// Source rectangle for blitting the framebuffer.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }
}
