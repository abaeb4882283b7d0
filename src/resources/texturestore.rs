//! Texture registry.
//!
//! Textures are loaded once at setup and looked up by string key during
//! rendering. `Texture2D` lives on the GPU but the handle itself is plain
//! data, so the store can be a regular resource.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Central registry of loaded textures keyed by string IDs.
#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    /// Register a texture under a key, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Look up a texture by key.
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
