//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems can look up an animation by a string
//! key and drive playback based on the immutable parameters stored here.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        AnimationStore {
            animations: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// Immutable data describing a sprite-sheet animation.
///
/// Frames are laid out left to right on a single row of the sheet. The
/// animation system interprets these parameters to advance frames and pick
/// the source cell for the sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Width of a single frame cell in pixels.
    pub frame_width: f32,
    /// Height of a single frame cell in pixels.
    pub frame_height: f32,
    /// Sheet row the animation occupies.
    pub row: usize,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Single-frame still image, useful for state poses.
    pub fn still(tex_key: &str, frame_width: f32, frame_height: f32, row: usize) -> Self {
        AnimationResource {
            tex_key: Arc::from(tex_key),
            frame_width,
            frame_height,
            row,
            frame_count: 1,
            fps: 1.0,
            looped: false,
        }
    }
}
